//! Site state and the transitions driven by UI actions and backend events.
//!
//! Everything here is plain data plus the command queue, so the whole flow can
//! be exercised without an egui context.

use crossbeam_channel::Sender;
use shared::{domain::Route, error::SubmitError};
use site_core::{
    submission::FormNotice, Carousel, CarouselInput, LeadForm, NavigationOutcome, Navigator,
    PointerTracker, Propagation, Resolution, SiteSettings, SubmitRefusal, View, Viewport,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::media::{AssetKey, PROJECT_IMAGES};

pub const EMPTY_EMAIL_HINT: &str = "Please fill out this field.";
pub const INVALID_EMAIL_HINT: &str = "Please enter a valid email address.";

pub struct HomeState {
    pub pointer: PointerTracker,
}

pub struct WorkState {
    pub carousel: Carousel<AssetKey>,
    pub expanded: bool,
}

impl WorkState {
    fn new() -> Self {
        let [first, rest @ ..] = PROJECT_IMAGES;
        Self {
            carousel: Carousel::with_first(first, rest),
            expanded: false,
        }
    }

    /// Control clicks stop at the control; only a bare frame click toggles
    /// the expanded preview.
    pub fn interact(&mut self, interaction: CarouselInteraction) {
        let propagation = match interaction.input {
            Some(input) => self.carousel.handle(input),
            None => Propagation::Continue,
        };
        if interaction.frame_clicked && propagation == Propagation::Continue {
            self.expanded = !self.expanded;
        }
    }
}

/// State owned by the active view. Replaced wholesale on navigation.
pub enum ViewState {
    Home(HomeState),
    Services,
    Work(WorkState),
    About,
    NotFound { path: String },
}

impl ViewState {
    pub fn activate(view: &View) -> Self {
        match view {
            View::Page(Route::Home) => ViewState::Home(HomeState {
                pointer: PointerTracker::subscribe(),
            }),
            View::Page(Route::Services) => ViewState::Services,
            View::Page(Route::Work) => ViewState::Work(WorkState::new()),
            View::Page(Route::About) => ViewState::About,
            View::NotFound { path } => ViewState::NotFound { path: path.clone() },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselInteraction {
    pub input: Option<CarouselInput>,
    pub frame_clicked: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(String),
    GoTo(Route),
    ToggleMenu,
    CloseMenu,
    ScrollToContact,
    ScrollToTop,
    EmailEdited,
    SubmitLead,
    DismissNotice,
    Carousel(CarouselInteraction),
    PointerMoved { x: f32, y: f32 },
    OpenExternal(&'static str),
}

/// Work the renderer performs on behalf of the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(&'static str),
}

pub struct SiteState {
    cmd_tx: Sender<BackendCommand>,
    pub navigator: Navigator,
    pub viewport: Viewport,
    pub view: ViewState,
    pub menu_open: bool,
    pub form: LeadForm,
    pub notice: Option<FormNotice>,
    pub form_hint: Option<&'static str>,
    pub status_banner: Option<String>,
    pub backend_ready: bool,
}

impl SiteState {
    pub fn new(
        settings: &SiteSettings,
        initial_path: &str,
        cmd_tx: Sender<BackendCommand>,
    ) -> Self {
        let navigator = Navigator::new(initial_path);
        let view = ViewState::activate(navigator.view());
        Self {
            cmd_tx,
            navigator,
            viewport: Viewport::new(),
            view,
            menu_open: false,
            form: LeadForm::new(settings.reset_delay),
            notice: None,
            form_hint: None,
            status_banner: None,
            backend_ready: false,
        }
    }

    pub fn apply(&mut self, action: UiAction) -> Option<Effect> {
        match action {
            UiAction::Navigate(path) => {
                self.menu_open = false;
                let outcome = self.navigator.navigate(&path, &mut self.viewport);
                self.after_navigation(outcome);
            }
            UiAction::GoTo(route) => {
                self.menu_open = false;
                let outcome = self.navigator.go(route, &mut self.viewport);
                self.after_navigation(outcome);
            }
            UiAction::ToggleMenu => self.menu_open = !self.menu_open,
            UiAction::CloseMenu => self.menu_open = false,
            UiAction::ScrollToContact => {
                self.menu_open = false;
                self.viewport.scroll_to_bottom();
            }
            UiAction::ScrollToTop => self.viewport.scroll_to_top(),
            UiAction::EmailEdited => self.form_hint = None,
            UiAction::SubmitLead => self.submit_lead(),
            UiAction::DismissNotice => self.notice = None,
            UiAction::Carousel(interaction) => {
                if let ViewState::Work(work) = &mut self.view {
                    work.interact(interaction);
                }
            }
            UiAction::PointerMoved { x, y } => {
                if let ViewState::Home(home) = &mut self.view {
                    home.pointer.track((x, y), &self.viewport);
                }
            }
            UiAction::OpenExternal(url) => {
                self.menu_open = false;
                return Some(Effect::OpenUrl(url));
            }
        }
        None
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::BackendReady => {
                self.backend_ready = true;
                tracing::debug!("backend ready");
            }
            UiEvent::LeadResolved { attempt, result } => {
                match self.form.resolve(attempt, result) {
                    Resolution::Succeeded(reset) => {
                        self.notice = None;
                        if let Err(err) = dispatch_backend_command(
                            &self.cmd_tx,
                            BackendCommand::ScheduleReset(reset),
                        ) {
                            // No timer will ever fire for this token; leave Success now.
                            self.form.reset_elapsed(reset.token);
                            self.show_error(err);
                        }
                    }
                    Resolution::Failed(notice) => self.notice = Some(notice),
                    Resolution::Stale => {}
                }
            }
            UiEvent::ResetElapsed(token) => {
                self.form.reset_elapsed(token);
            }
            UiEvent::Error(err) => self.show_error(err),
        }
    }

    /// Invalidates outstanding form work and stops the backend worker.
    pub fn teardown(&mut self) {
        self.form.teardown();
        let _ = self.cmd_tx.try_send(BackendCommand::CancelReset);
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }

    fn after_navigation(&mut self, outcome: NavigationOutcome) {
        if let NavigationOutcome::Changed { generation } = outcome {
            self.view = ViewState::activate(self.navigator.view());
            tracing::debug!(generation, "view state recreated");
        }
    }

    fn submit_lead(&mut self) {
        let pending = match self.form.submit() {
            Ok(pending) => pending,
            Err(SubmitRefusal::Empty) => {
                self.form_hint = Some(EMPTY_EMAIL_HINT);
                return;
            }
            Err(SubmitRefusal::InvalidEmail) => {
                self.form_hint = Some(INVALID_EMAIL_HINT);
                return;
            }
            Err(SubmitRefusal::Busy(_)) => return,
        };

        self.form_hint = None;
        let attempt = pending.attempt;
        let cmd = BackendCommand::SubmitLead {
            attempt,
            request: pending.request,
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            // The POST never left, so resolve the attempt as a transport failure.
            let result = Err(SubmitError::Network(err.message().to_string()));
            if let Resolution::Failed(notice) = self.form.resolve(attempt, result) {
                self.notice = Some(notice);
            }
            self.show_error(err);
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::warn!(context = ?err.context(), "{}", err.message());
        if err.context() == UiErrorContext::BackendStartup {
            self.backend_ready = false;
        }
        self.status_banner = Some(err.banner_text());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossbeam_channel::{bounded, Receiver};
    use shared::domain::{AttemptId, ResetToken, SubmissionStatus};
    use site_core::submission::ScheduledReset;

    use super::*;

    fn state_at(path: &str) -> (SiteState, Receiver<BackendCommand>) {
        let (tx, rx) = bounded(8);
        (SiteState::new(&SiteSettings::default(), path, tx), rx)
    }

    fn submitted(state: &mut SiteState, rx: &Receiver<BackendCommand>) -> AttemptId {
        state.form.set_email("ceo@example.com");
        state.apply(UiAction::SubmitLead);
        match rx.try_recv() {
            Ok(BackendCommand::SubmitLead { attempt, request }) => {
                assert_eq!(request.email, "ceo@example.com");
                attempt
            }
            other => panic!("expected SubmitLead, got {other:?}"),
        }
    }

    #[test]
    fn route_change_resets_scroll_and_work_state() {
        let (mut state, _rx) = state_at("/work");
        state.apply(UiAction::Carousel(CarouselInteraction {
            input: Some(CarouselInput::Next),
            frame_clicked: false,
        }));
        state.viewport.observe(640.0, 3000.0, 800.0);

        state.apply(UiAction::GoTo(Route::About));
        state.apply(UiAction::GoTo(Route::Work));

        assert_eq!(state.viewport.take_request(), Some(0.0));
        match &state.view {
            ViewState::Work(work) => assert_eq!(work.carousel.index(), 0),
            _ => panic!("expected the work view"),
        }
    }

    #[test]
    fn navigating_to_the_current_path_keeps_view_state() {
        let (mut state, _rx) = state_at("/work");
        state.apply(UiAction::Carousel(CarouselInteraction {
            input: Some(CarouselInput::Next),
            frame_clicked: false,
        }));
        state.viewport.observe(400.0, 3000.0, 800.0);

        state.apply(UiAction::Navigate("/work/".into()));

        assert_eq!(state.viewport.pending_request(), None);
        assert_eq!(state.viewport.scroll_offset(), 400.0);
        match &state.view {
            ViewState::Work(work) => assert_eq!(work.carousel.index(), 1),
            _ => panic!("expected the work view"),
        }
    }

    #[test]
    fn arrow_clicks_do_not_toggle_the_preview() {
        let (mut state, _rx) = state_at("/work");
        state.apply(UiAction::Carousel(CarouselInteraction {
            input: Some(CarouselInput::Previous),
            frame_clicked: true,
        }));
        let ViewState::Work(work) = &state.view else {
            panic!("expected the work view");
        };
        assert_eq!(work.carousel.index(), 1);
        assert!(!work.expanded);

        state.apply(UiAction::Carousel(CarouselInteraction {
            input: None,
            frame_clicked: true,
        }));
        let ViewState::Work(work) = &state.view else {
            panic!("expected the work view");
        };
        assert!(work.expanded);
    }

    #[test]
    fn choosing_a_link_closes_the_mobile_menu() {
        let (mut state, _rx) = state_at("/");
        state.apply(UiAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(UiAction::GoTo(Route::Services));
        assert!(!state.menu_open);
        assert!(state.navigator.is_active(Route::Services));
    }

    #[test]
    fn unknown_path_activates_not_found() {
        let (state, _rx) = state_at("/pricing");
        assert!(matches!(&state.view, ViewState::NotFound { path } if path == "/pricing"));
    }

    #[test]
    fn empty_submit_shows_hint_without_a_call() {
        let (mut state, rx) = state_at("/");
        state.apply(UiAction::SubmitLead);
        assert_eq!(state.form_hint, Some(EMPTY_EMAIL_HINT));
        assert_eq!(state.form.status(), SubmissionStatus::Idle);
        assert!(rx.try_recv().is_err());

        state.apply(UiAction::EmailEdited);
        assert_eq!(state.form_hint, None);
    }

    #[test]
    fn success_schedules_reset_and_elapsed_token_returns_to_idle() {
        let (mut state, rx) = state_at("/");
        let attempt = submitted(&mut state, &rx);
        assert_eq!(state.form.status(), SubmissionStatus::Submitting);

        state.handle_event(UiEvent::LeadResolved {
            attempt,
            result: Ok(()),
        });
        assert_eq!(state.form.status(), SubmissionStatus::Success);
        assert_eq!(state.form.email(), "");
        assert_eq!(
            rx.try_recv(),
            Ok(BackendCommand::ScheduleReset(ScheduledReset {
                token: ResetToken(1),
                delay: Duration::from_secs(3),
            }))
        );

        state.handle_event(UiEvent::ResetElapsed(ResetToken(1)));
        assert_eq!(state.form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn unqueued_reset_returns_the_form_to_idle() {
        let (tx, rx) = bounded(1);
        let mut state = SiteState::new(&SiteSettings::default(), "/", tx);
        let attempt = submitted(&mut state, &rx);
        state
            .cmd_tx
            .try_send(BackendCommand::CancelReset)
            .expect("fill queue");

        state.handle_event(UiEvent::LeadResolved {
            attempt,
            result: Ok(()),
        });

        assert_eq!(state.form.status(), SubmissionStatus::Idle);
        assert!(state.form.input_enabled());
        assert!(state.form.submit_enabled());
        assert_eq!(state.form.email(), "");
        assert_eq!(
            state.status_banner.as_deref(),
            Some("Connection problem: UI command queue is full; please retry")
        );
        assert_eq!(rx.try_recv(), Ok(BackendCommand::CancelReset));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn leaving_home_ends_pointer_tracking() {
        let (mut state, _rx) = state_at("/");
        state.viewport.resize(800.0, 600.0);
        state.apply(UiAction::PointerMoved { x: 800.0, y: 600.0 });
        let ViewState::Home(home) = &state.view else {
            panic!("expected the home view");
        };
        assert_eq!(home.pointer.offset(), (10.0, 10.0));

        state.apply(UiAction::GoTo(Route::Services));
        assert!(matches!(state.view, ViewState::Services));
        state.apply(UiAction::PointerMoved { x: 0.0, y: 0.0 });

        state.apply(UiAction::GoTo(Route::Home));
        let ViewState::Home(home) = &state.view else {
            panic!("expected the home view");
        };
        assert_eq!(home.pointer.offset(), (0.0, 0.0));
    }

    #[test]
    fn failure_surfaces_notice_and_keeps_email() {
        let (mut state, rx) = state_at("/");
        let attempt = submitted(&mut state, &rx);
        state.handle_event(UiEvent::LeadResolved {
            attempt,
            result: Err(SubmitError::Network("connection refused".into())),
        });

        assert_eq!(state.form.status(), SubmissionStatus::Idle);
        assert_eq!(state.form.email(), "ceo@example.com");
        let notice = state.notice.clone().expect("notice");
        assert_eq!(notice.message, "Network error. Please check your connection.");

        state.apply(UiAction::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_not_queued() {
        let (mut state, rx) = state_at("/");
        submitted(&mut state, &rx);
        state.apply(UiAction::SubmitLead);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn disconnected_backend_fails_the_attempt_locally() {
        let (mut state, rx) = state_at("/");
        drop(rx);
        state.form.set_email("ceo@example.com");
        state.apply(UiAction::SubmitLead);

        assert_eq!(state.form.status(), SubmissionStatus::Idle);
        assert!(state.notice.is_some());
        assert!(state.status_banner.is_some());
    }

    #[test]
    fn external_links_become_effects() {
        let (mut state, _rx) = state_at("/");
        assert_eq!(
            state.apply(UiAction::OpenExternal("mailto:hello@example.com")),
            Some(Effect::OpenUrl("mailto:hello@example.com"))
        );
    }

    #[test]
    fn teardown_stops_the_backend() {
        let (mut state, rx) = state_at("/");
        state.teardown();
        assert_eq!(rx.try_recv(), Ok(BackendCommand::CancelReset));
        assert_eq!(rx.try_recv(), Ok(BackendCommand::Shutdown));
    }
}
