//! Behavior behind the BusinessLogics site: routing, the portfolio carousel
//! and the lead-capture form, kept free of any rendering concerns.

pub mod carousel;
pub mod config;
pub mod content;
pub mod email;
pub mod lead_client;
pub mod routes;
pub mod scheduler;
pub mod submission;
pub mod viewport;

pub use carousel::{Carousel, CarouselError, CarouselInput, Propagation};
pub use config::{load_settings, SettingsError, SiteSettings};
pub use lead_client::{HttpLeadSink, LeadSink};
pub use routes::{NavigationOutcome, Navigator, View};
pub use scheduler::ResetTimer;
pub use submission::{LeadForm, PendingSubmission, Resolution, SubmitRefusal};
pub use viewport::{PointerTracker, Viewport};
