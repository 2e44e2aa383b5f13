//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use site_core::{HttpLeadSink, LeadSink, ResetTimer, SiteSettings};
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    settings: &SiteSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    let sink = HttpLeadSink::new(settings.endpoint_url.clone()).with_timeout(settings.request_timeout);
    info!(endpoint = %sink.endpoint(), "lead endpoint configured");
    launch_with_sink(Arc::new(sink), cmd_rx, ui_tx)
}

pub fn launch_with_sink(
    sink: Arc<dyn LeadSink>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("site-backend")
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::BackendReady);
            let mut reset_timer: Option<ResetTimer> = None;

            while let Ok(cmd) = cmd_rx.recv() {
                debug!(command = cmd.name(), "backend received command");
                match cmd {
                    BackendCommand::SubmitLead { attempt, request } => {
                        let sink = Arc::clone(&sink);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let result = sink.submit(&request).await;
                            if ui_tx
                                .send(UiEvent::LeadResolved { attempt, result })
                                .is_err()
                            {
                                debug!(attempt = attempt.0, "ui closed before submission resolved");
                            }
                        });
                    }
                    BackendCommand::ScheduleReset(reset) => {
                        let ui_tx = ui_tx.clone();
                        reset_timer = Some(ResetTimer::schedule(reset, move |token| {
                            // Blocks only while the UI queue is full; the reset is the
                            // only way out of Success.
                            if ui_tx.send(UiEvent::ResetElapsed(token)).is_err() {
                                warn!(token = token.0, "ui closed before reset elapsed");
                            }
                        }));
                    }
                    BackendCommand::CancelReset => {
                        reset_timer = None;
                    }
                    BackendCommand::Shutdown => break,
                }
            }

            drop(reset_timer);
            info!("backend worker stopped");
        });
    })
}
