//! # Verdicts and Transcript
//!
//! Turns what happened to one request into a [`Verdict`], and renders the
//! console transcript an operator reads after a run.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::cases::TestCase;
use crate::http::error::SendError;
use crate::http::response::HttpResponse;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Succeeded,
    FailedAsExpected,
    UnexpectedRejection,
    UnexpectedSuccess,
    ConnectionFailed,
    TransportError(String),
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Succeeded | Verdict::FailedAsExpected)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Succeeded => write!(f, "✅ Success!"),
            Verdict::FailedAsExpected => write!(f, "✅ Failed as expected!"),
            Verdict::UnexpectedRejection => write!(f, "❌ Expected success but got error"),
            Verdict::UnexpectedSuccess => write!(f, "❌ Expected failure but succeeded"),
            Verdict::ConnectionFailed => {
                write!(f, "❌ Connection failed! Is the Notifier app running?")
            }
            Verdict::TransportError(message) => write!(f, "❌ Error: {message}"),
        }
    }
}

/// Result of running one case. `status_code` is `None` when no response came back.
///
/// `matched_expectation` and `verdict.passed()` answer different questions.
/// The first compares "succeeded" with `expected_success`, and a missing
/// response counts as not succeeding. The second
/// is the check shown to the operator, and a case with no response never
/// passes. So an unreachable server matches every rejection case while still
/// failing all six checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status_code: Option<u16>,
    pub body_text: String,
    pub matched_expectation: bool,
    pub verdict: Verdict,
}

/// Compare what the server did with what the case expected.
///
/// A missing response never counts as success: it matches only cases that
/// expected rejection, but the verdict still names the failure.
pub fn classify(expected_success: bool, result: &Result<HttpResponse, SendError>) -> Outcome {
    match result {
        Ok(response) => {
            let succeeded = response.is_accepted();
            let verdict = match (expected_success, succeeded) {
                (true, true) => Verdict::Succeeded,
                (true, false) => Verdict::UnexpectedRejection,
                (false, false) => Verdict::FailedAsExpected,
                (false, true) => Verdict::UnexpectedSuccess,
            };
            Outcome {
                status_code: Some(response.status),
                body_text: response.body.clone(),
                matched_expectation: expected_success == succeeded,
                verdict,
            }
        }
        Err(err) if err.is_connect() => unanswered(expected_success, Verdict::ConnectionFailed),
        Err(err) => unanswered(expected_success, Verdict::TransportError(err.chain_message())),
    }
}

/// Outcome for a case whose request never got a response. `verdict` is
/// expected to be one of the failure variants.
pub fn unanswered(expected_success: bool, verdict: Verdict) -> Outcome {
    Outcome {
        status_code: None,
        body_text: String::new(),
        matched_expectation: !expected_success,
        verdict,
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn write_banner<W: Write>(out: &mut W, endpoint: &str) -> io::Result<()> {
    writeln!(out, "🧪 Testing Notifier HTTP Server")?;
    writeln!(out, "Server: {endpoint}")
}

pub fn write_case_header<W: Write>(out: &mut W, case: &TestCase) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Test: {}", case.name)?;
    writeln!(out, "{}", rule())?;
    match case.payload.to_pretty_json() {
        Ok(json) => writeln!(out, "Sending: {json}"),
        Err(err) => writeln!(out, "Sending: <unencodable payload: {err}>"),
    }
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    if let Some(status) = outcome.status_code {
        writeln!(out, "Status Code: {status}")?;
        writeln!(out, "Response: {}", outcome.body_text)?;
    }
    writeln!(out, "{}", outcome.verdict)
}

pub fn write_completion<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "✅ Testing complete!")?;
    writeln!(out, "Check your notifications to see if they appeared.")?;
    writeln!(out, "{}", rule())?;
    writeln!(out)
}
