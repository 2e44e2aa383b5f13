//! Lead-capture form lifecycle.
//!
//! [`LeadForm`] is a pure state machine: it decides transitions and hands the
//! caller the side effects to perform (the POST to issue, the reset to
//! schedule, the notice to show). Effects come back in tagged with the
//! [`AttemptId`] or [`ResetToken`] they were issued under, and anything that
//! no longer matches the form's current attempt or generation is dropped.

use std::time::Duration;

use shared::{
    domain::{AttemptId, ResetToken, SubmissionStatus},
    error::SubmitError,
    protocol::LeadCaptureRequest,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::email;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: AttemptId,
    pub request: LeadCaptureRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefusal {
    #[error("email field is empty")]
    Empty,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("form is busy ({0:?})")]
    Busy(SubmissionStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReset {
    pub token: ResetToken,
    pub delay: Duration,
}

/// Blocking notification the visitor must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormNotice {
    pub message: &'static str,
    pub cause: SubmitError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Succeeded(ScheduledReset),
    Failed(FormNotice),
    Stale,
}

#[derive(Debug)]
pub struct LeadForm {
    email: String,
    status: SubmissionStatus,
    in_flight: Option<AttemptId>,
    next_attempt: u64,
    generation: u64,
    reset_delay: Duration,
}

impl LeadForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            email: String::new(),
            status: SubmissionStatus::Idle,
            in_flight: None,
            next_attempt: 0,
            generation: 0,
            reset_delay,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Mutable access to the bound buffer while the field is editable.
    pub fn email_buffer(&mut self) -> Option<&mut String> {
        self.input_enabled().then_some(&mut self.email)
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        match self.email_buffer() {
            Some(buffer) => {
                *buffer = value.into();
                true
            }
            None => false,
        }
    }

    pub fn input_enabled(&self) -> bool {
        self.status != SubmissionStatus::Success
    }

    pub fn submit_enabled(&self) -> bool {
        self.status.is_idle()
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitRefusal> {
        if !self.submit_enabled() {
            debug!(status = ?self.status, "submit ignored while form is busy");
            return Err(SubmitRefusal::Busy(self.status));
        }

        let address = email::sanitize(&self.email);
        if address.is_empty() {
            return Err(SubmitRefusal::Empty);
        }
        if !email::is_valid(address) {
            return Err(SubmitRefusal::InvalidEmail);
        }

        let request = LeadCaptureRequest::new(address);
        self.next_attempt += 1;
        let attempt = AttemptId(self.next_attempt);
        self.in_flight = Some(attempt);
        self.status = SubmissionStatus::Submitting;
        info!(
            attempt = attempt.0,
            domain = email::domain_of(&request.email),
            "lead submission started"
        );
        Ok(PendingSubmission { attempt, request })
    }

    pub fn resolve(&mut self, attempt: AttemptId, result: Result<(), SubmitError>) -> Resolution {
        if self.in_flight != Some(attempt) || self.status != SubmissionStatus::Submitting {
            debug!(attempt = attempt.0, "dropping stale submission result");
            return Resolution::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.email.clear();
                self.status = SubmissionStatus::Success;
                self.generation += 1;
                info!(attempt = attempt.0, "lead submission accepted");
                Resolution::Succeeded(ScheduledReset {
                    token: ResetToken(self.generation),
                    delay: self.reset_delay,
                })
            }
            Err(cause) => {
                self.status = SubmissionStatus::Idle;
                warn!(attempt = attempt.0, error = %cause, "lead submission failed");
                Resolution::Failed(FormNotice {
                    message: cause.user_message(),
                    cause,
                })
            }
        }
    }

    /// Applies a scheduled reset. Returns `false` when the token is stale.
    pub fn reset_elapsed(&mut self, token: ResetToken) -> bool {
        if self.status != SubmissionStatus::Success || token != ResetToken(self.generation) {
            debug!(token = token.0, "ignoring stale reset");
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Invalidates every outstanding attempt and reset token.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.in_flight = None;
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

#[cfg(test)]
#[path = "tests/submission_tests.rs"]
mod tests;
