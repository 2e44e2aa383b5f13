//! Backend commands queued from UI to backend worker.

use shared::domain::AttemptId;
use shared::protocol::LeadCaptureRequest;
use site_core::submission::ScheduledReset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    SubmitLead {
        attempt: AttemptId,
        request: LeadCaptureRequest,
    },
    ScheduleReset(ScheduledReset),
    CancelReset,
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitLead { .. } => "submit_lead",
            BackendCommand::ScheduleReset(_) => "schedule_reset",
            BackendCommand::CancelReset => "cancel_reset",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
