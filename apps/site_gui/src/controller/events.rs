//! UI/backend events and error modeling for the site controller.

use shared::{
    domain::{AttemptId, ResetToken},
    error::SubmitError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    BackendReady,
    LeadResolved {
        attempt: AttemptId,
        result: Result<(), SubmitError>,
    },
    ResetElapsed(ResetToken),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LeadSubmission,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("disconnect")
            || message_lower.contains("queue is full")
            || message_lower.contains("startup failure")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text for the status strip under the header.
    pub fn banner_text(&self) -> String {
        match self.context {
            UiErrorContext::BackendStartup => {
                "The contact form is unavailable right now; restart the app to try again."
                    .to_string()
            }
            UiErrorContext::LeadSubmission | UiErrorContext::General => {
                format!("{}: {}", err_label(self.category), self.message)
            }
        }
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Connection problem",
        UiErrorCategory::Unknown => "Unexpected error",
    }
}
