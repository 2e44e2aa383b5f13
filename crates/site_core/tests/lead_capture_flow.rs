use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use shared::{
    domain::{ResetToken, SubmissionStatus},
    error::SubmitError,
    protocol::LeadCaptureRequest,
};
use site_core::{LeadForm, LeadSink, ResetTimer, Resolution};
use tokio::sync::{mpsc, Mutex};

/// Sink that replays canned outcomes and counts calls.
struct ScriptedSink {
    outcomes: Mutex<VecDeque<Result<(), SubmitError>>>,
    calls: AtomicUsize,
    received: Mutex<Vec<LeadCaptureRequest>>,
}

impl ScriptedSink {
    fn new(outcomes: impl IntoIterator<Item = Result<(), SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeadSink for ScriptedSink {
    async fn submit(&self, request: &LeadCaptureRequest) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().await.push(request.clone());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(SubmitError::Network("script exhausted".into())))
    }
}

/// Runs one submit cycle the way the backend bridge does and returns the
/// timer if a reset was scheduled.
async fn submit_once(
    form: &mut LeadForm,
    sink: &dyn LeadSink,
    resets: &mpsc::UnboundedSender<ResetToken>,
) -> (Resolution, Option<ResetTimer>) {
    let Ok(pending) = form.submit() else {
        return (Resolution::Stale, None);
    };
    let result = sink.submit(&pending.request).await;
    let resolution = form.resolve(pending.attempt, result);
    let timer = match &resolution {
        Resolution::Succeeded(reset) => {
            let tx = resets.clone();
            Some(ResetTimer::schedule(*reset, move |token| {
                let _ = tx.send(token);
            }))
        }
        _ => None,
    };
    (resolution, timer)
}

#[tokio::test(start_paused = true)]
async fn success_returns_to_idle_after_the_reset_delay() {
    let sink = ScriptedSink::new([Ok(())]);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = LeadForm::new(Duration::from_secs(3));
    form.set_email("ceo@example.com");

    let (resolution, _timer) = submit_once(&mut form, sink.as_ref(), &tx).await;
    assert!(matches!(resolution, Resolution::Succeeded(_)));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.email(), "");
    assert_eq!(
        sink.received.lock().await.as_slice(),
        &[LeadCaptureRequest::new("ceo@example.com")]
    );

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(form.status(), SubmissionStatus::Success);

    let token = rx.recv().await.expect("reset fires");
    assert!(form.reset_elapsed(token));
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn failed_submission_can_be_retried_manually() {
    let sink = ScriptedSink::new([Err(SubmitError::Rejected { status: 503 }), Ok(())]);
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut form = LeadForm::default();
    form.set_email("ceo@example.com");

    let (first, timer) = submit_once(&mut form, sink.as_ref(), &tx).await;
    assert!(matches!(first, Resolution::Failed(_)));
    assert!(timer.is_none());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.email(), "ceo@example.com");

    let (second, _timer) = submit_once(&mut form, sink.as_ref(), &tx).await;
    assert!(matches!(second, Resolution::Succeeded(_)));
    assert_eq!(sink.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn empty_form_never_reaches_the_sink() {
    let sink = ScriptedSink::new([Ok(())]);
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut form = LeadForm::default();

    let (resolution, timer) = submit_once(&mut form, sink.as_ref(), &tx).await;
    assert_eq!(resolution, Resolution::Stale);
    assert!(timer.is_none());
    assert_eq!(sink.calls(), 0);
    assert_eq!(form.status(), SubmissionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn tearing_down_the_form_cancels_its_reset() {
    let sink = ScriptedSink::new([Ok(())]);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut form = LeadForm::default();
    form.set_email("ceo@example.com");

    let (_, timer) = submit_once(&mut form, sink.as_ref(), &tx).await;
    drop(tx);
    form.teardown();
    drop(timer);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.recv().await, None);
}
