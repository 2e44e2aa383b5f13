//! Cancelable timer behind the form's auto-reset.

use shared::domain::ResetToken;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::submission::ScheduledReset;

/// A pending reset. Dropping or cancelling it guarantees the callback does
/// not run afterwards.
#[derive(Debug)]
pub struct ResetTimer {
    token: ResetToken,
    handle: JoinHandle<()>,
}

impl ResetTimer {
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(reset: ScheduledReset, on_elapsed: F) -> Self
    where
        F: FnOnce(ResetToken) + Send + 'static,
    {
        let ScheduledReset { token, delay } = reset;
        debug!(token = token.0, delay_ms = delay.as_millis() as u64, "reset scheduled");
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed(token);
        });
        Self { token, handle }
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(token = self.token.0, "reset cancelled");
            self.handle.abort();
        }
    }
}
