use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Rejected,
    Network,
}

/// Failure of a lead submission as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("collection endpoint responded with status {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
}

impl SubmitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmitError::Rejected { .. } => ErrorCode::Rejected,
            SubmitError::Network(_) => ErrorCode::Network,
        }
    }

    /// Text shown to the visitor in the blocking notification.
    pub fn user_message(&self) -> &'static str {
        match self.code() {
            ErrorCode::Rejected => "There was a problem submitting the form. Please try again.",
            ErrorCode::Network => "Network error. Please check your connection.",
        }
    }
}
