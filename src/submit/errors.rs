//! Submission error categorization
//!
//! Turns reqwest failures and non-2xx responses into a small taxonomy with
//! user-friendly summaries and suggestions.

use thiserror::Error;

/// Longest response body kept for the log
const MAX_BODY_EXCERPT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Endpoint answered with a non-2xx status
    #[error("server returned HTTP {code}")]
    Status { code: u16, body: String },

    /// Request did not finish within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Could not connect (DNS, refused, unreachable)
    #[error("could not connect: {0}")]
    Connect(String),

    /// Any other transport failure
    #[error("request failed: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Build a status error, keeping only the start of the body
    pub fn status(code: u16, body: &str) -> Self {
        let body: String = body.trim().chars().take(MAX_BODY_EXCERPT).collect();
        SubmitError::Status { code, body }
    }

    /// Short summary (one line)
    pub fn summary(&self) -> String {
        match self {
            SubmitError::Status { code, .. } if (500..600).contains(code) => {
                format!("Server error (HTTP {})", code)
            }
            SubmitError::Status { code, .. } => format!("Submission rejected (HTTP {})", code),
            SubmitError::Timeout => "Submission timed out".to_string(),
            SubmitError::Connect(_) => "Could not reach the server".to_string(),
            SubmitError::Transport(_) => "Submission failed".to_string(),
        }
    }

    /// User-friendly suggestion
    pub fn suggestion(&self) -> &'static str {
        match self {
            SubmitError::Status { code, .. } if (500..600).contains(code) => {
                "The server had a problem. Try again in a few minutes."
            }
            SubmitError::Status { .. } => "Check the entered details and try again.",
            SubmitError::Timeout => "The server is slow to respond. Try again.",
            SubmitError::Connect(_) => "Check your connection and the configured endpoint URL.",
            SubmitError::Transport(_) => "Check the log for details.",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if err.is_connect() {
            SubmitError::Connect(err.to_string())
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}
