use std::error::Error as _;

use thiserror::Error;

/// Why a request produced no response.
#[derive(Debug, Error)]
pub enum SendError {
    /// Nothing accepted the connection: server not running or unreachable.
    #[error("connection failed")]
    Connect(#[source] reqwest::Error),
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("failed to encode payload")]
    Encode(#[from] serde_json::Error),
}

impl SendError {
    pub fn is_connect(&self) -> bool {
        matches!(self, SendError::Connect(_))
    }

    /// This error and every cause under it, joined with `: `.
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            SendError::Connect(err)
        } else {
            SendError::Transport(err)
        }
    }
}
