use crate::cases::Payload;

/// A JSON POST to a single endpoint.
#[derive(Debug, Clone)]
pub struct RequestInput {
    pub url: String,
    pub payload: Payload,
}

impl RequestInput {
    pub fn new(url: impl Into<String>, payload: Payload) -> Self {
        Self {
            url: url.into(),
            payload,
        }
    }
}
