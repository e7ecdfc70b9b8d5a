use std::time::Duration;

const SERVER_URL: &str = "http://localhost:8000";
const PAUSE_BETWEEN_CASES: Duration = Duration::from_secs(2);

/// Where the battery is sent and how long to wait between cases so the
/// operator can see each notification land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    pub endpoint: String,
    pub pause: Duration,
}

impl VerifierConfig {
    pub fn new(endpoint: impl Into<String>, pause: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            pause,
        }
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::new(SERVER_URL, PAUSE_BETWEEN_CASES)
    }
}
