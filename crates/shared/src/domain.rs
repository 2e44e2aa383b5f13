#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Work,
    About,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Services, Route::Work, Route::About];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Work => "/work",
            Route::About => "/about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Work => "Work",
            Route::About => "About",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    pub fn is_idle(self) -> bool {
        self == SubmissionStatus::Idle
    }
}

/// Monotonic id of one submission attempt within a form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(pub u64);

/// Generation token carried by a scheduled auto-reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetToken(pub u64);
