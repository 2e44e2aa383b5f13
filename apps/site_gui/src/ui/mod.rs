//! UI layer for the site: app shell, page chrome, pages, widgets and theme.

pub mod app;
pub mod layout;
pub mod pages;
pub mod theme;
pub mod widgets;

pub use app::SiteApp;
