//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    let context = match &cmd {
        BackendCommand::SubmitLead { .. } => UiErrorContext::LeadSubmission,
        _ => UiErrorContext::General,
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(UiError::from_message(
                context,
                "UI command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(UiError::from_message(
                context,
                "Backend command processor disconnected",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::AttemptId;
    use shared::protocol::LeadCaptureRequest;

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn submit() -> BackendCommand {
        BackendCommand::SubmitLead {
            attempt: AttemptId(1),
            request: LeadCaptureRequest::new("ceo@example.com"),
        }
    }

    #[test]
    fn queues_when_there_is_room() {
        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, submit()).expect("queued");
        assert_eq!(rx.try_recv(), Ok(submit()));
    }

    #[test]
    fn full_queue_is_reported_against_the_submission() {
        let (tx, _rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::CancelReset).expect("queued");
        let err = dispatch_backend_command(&tx, submit()).unwrap_err();
        assert_eq!(err.context(), UiErrorContext::LeadSubmission);
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }

    #[test]
    fn disconnected_backend_is_a_transport_error() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let err = dispatch_backend_command(&tx, BackendCommand::Shutdown).unwrap_err();
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.context(), UiErrorContext::General);
    }
}
