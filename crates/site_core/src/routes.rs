//! Path → view selection and navigation.

use shared::domain::Route;
use tracing::info;

use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Page(Route),
    NotFound { path: String },
}

impl View {
    pub fn route(&self) -> Option<Route> {
        match self {
            View::Page(route) => Some(*route),
            View::NotFound { .. } => None,
        }
    }
}

/// Path as the visitor wrote it: query and fragment dropped, leading slash
/// enforced, one trailing slash removed. Case is kept.
pub fn display_path(raw: &str) -> String {
    let raw = raw.trim();
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut path = raw[..end].to_string();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Canonical form used for matching: [`display_path`] in ASCII lowercase.
pub fn normalize_path(raw: &str) -> String {
    display_path(raw).to_ascii_lowercase()
}

pub fn match_route(path: &str) -> Option<Route> {
    let normalized = normalize_path(path);
    Route::ALL
        .into_iter()
        .find(|route| route.path() == normalized)
}

pub fn resolve(path: &str) -> View {
    match match_route(path) {
        Some(route) => View::Page(route),
        None => View::NotFound {
            path: display_path(path),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The active view changed; per-view state for `generation` must be
    /// created fresh.
    Changed { generation: u64 },
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    path: String,
    view: View,
    generation: u64,
}

impl Navigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            path: normalize_path(initial_path),
            view: resolve(initial_path),
            generation: 0,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.view.route() == Some(route)
    }

    pub fn navigate(&mut self, path: &str, viewport: &mut Viewport) -> NavigationOutcome {
        let normalized = normalize_path(path);
        if normalized == self.path {
            return NavigationOutcome::Unchanged;
        }

        self.view = resolve(path);
        self.path = normalized;
        self.generation += 1;
        viewport.scroll_to_top();
        info!(path = %self.path, generation = self.generation, "navigated");
        NavigationOutcome::Changed {
            generation: self.generation,
        }
    }

    pub fn go(&mut self, route: Route, viewport: &mut Viewport) -> NavigationOutcome {
        self.navigate(route.path(), viewport)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
