use std::io::{self, Write};

use crate::cases::{TestCase, battery};
use crate::config::VerifierConfig;
use crate::http::client::{build_client, post_json};
use crate::http::request::RequestInput;
use crate::report::{self, Outcome, Verdict};

/// Runs the fixed battery against one endpoint, one request at a time.
pub struct Verifier {
    config: VerifierConfig,
    cases: Vec<TestCase>,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            config,
            cases: battery(),
        }
    }

    /// Run every case and print the transcript to stdout. Nothing here fails
    /// the process: per-case errors are part of the transcript.
    pub async fn run_all(&self) {
        let mut stdout = io::stdout();
        if let Err(err) = self.run_battery(&mut stdout).await {
            log::error!("failed to write transcript: {err}");
        }
    }

    pub(crate) async fn run_battery<W: Write>(&self, out: &mut W) -> io::Result<Vec<Outcome>> {
        report::write_banner(out, &self.config.endpoint)?;

        let client = build_client().map_err(|err| err.to_string());
        if let Err(message) = &client {
            log::error!("could not set up HTTP client: {message}");
        }

        let mut outcomes = Vec::with_capacity(self.cases.len());
        for (index, case) in self.cases.iter().enumerate() {
            if index > 0 && !self.config.pause.is_zero() {
                tokio::time::sleep(self.config.pause).await;
            }

            report::write_case_header(out, case)?;
            out.flush()?;

            let outcome = match &client {
                Ok(client) => {
                    let request =
                        RequestInput::new(self.config.endpoint.as_str(), case.payload.clone());
                    let result = post_json(client, &request).await;
                    if let Err(err) = &result {
                        log::debug!("case `{}`: {err}", case.name);
                    }
                    report::classify(case.expected_success, &result)
                }
                Err(message) => report::unanswered(
                    case.expected_success,
                    Verdict::TransportError(message.clone()),
                ),
            };
            log::info!("case `{}`: passed={}", case.name, outcome.verdict.passed());

            report::write_outcome(out, &outcome)?;
            outcomes.push(outcome);
        }

        report::write_completion(out)?;
        out.flush()?;
        Ok(outcomes)
    }
}
