use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::submission::DEFAULT_RESET_DELAY;

pub const DEFAULT_ENDPOINT_URL: &str = "https://formspree.io/f/mwpjkrla";
pub const DEFAULT_SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("endpoint must be an http(s) URL, got {0:?}")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub endpoint_url: Url,
    pub reset_delay: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            endpoint_url: Url::parse(DEFAULT_ENDPOINT_URL)
                .unwrap_or_else(|_| unreachable!("default endpoint is a valid URL")),
            reset_delay: DEFAULT_RESET_DELAY,
            request_timeout: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    endpoint_url: Option<String>,
    reset_delay_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
}

pub fn parse_endpoint(raw: &str) -> Result<Url, SettingsError> {
    let url = Url::parse(raw.trim()).map_err(|_| SettingsError::InvalidEndpoint(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(SettingsError::InvalidEndpoint(raw.to_string())),
    }
}

/// Defaults, then the settings file, then `SITE__*` environment variables.
///
/// An explicitly requested file must exist; the default `site.toml` is
/// optional.
pub fn load_settings(explicit_file: Option<&Path>) -> Result<SiteSettings, SettingsError> {
    let mut settings = SiteSettings::default();

    let (path, required) = match explicit_file {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &path, &raw)?,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => return Err(SettingsError::Read { path, source }),
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut SiteSettings, path: &Path, raw: &str) -> Result<(), SettingsError> {
    let file: SettingsFile = toml::from_str(raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(endpoint) = file.endpoint_url {
        settings.endpoint_url = parse_endpoint(&endpoint)?;
    }
    if let Some(ms) = file.reset_delay_ms {
        settings.reset_delay = reset_delay_from_millis("reset_delay_ms", ms)?;
    }
    if let Some(secs) = file.request_timeout_secs {
        settings.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    Ok(())
}

pub fn apply_env_overrides(
    settings: &mut SiteSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), SettingsError> {
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("SITE__ENDPOINT_URL") {
        settings.endpoint_url = parse_endpoint(&v)?;
    }
    if let Some(v) = read("SITE__RESET_DELAY_MS") {
        let ms = parse_u64("SITE__RESET_DELAY_MS", &v)?;
        settings.reset_delay = reset_delay_from_millis("SITE__RESET_DELAY_MS", ms)?;
    }
    if let Some(v) = read("SITE__REQUEST_TIMEOUT_SECS") {
        let secs = parse_u64("SITE__REQUEST_TIMEOUT_SECS", &v)?;
        settings.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
    Ok(())
}

/// The success state has to stay visible, so a zero delay is refused.
fn reset_delay_from_millis(key: &'static str, ms: u64) -> Result<Duration, SettingsError> {
    if ms == 0 {
        return Err(SettingsError::InvalidValue {
            key,
            value: ms.to_string(),
        });
    }
    Ok(Duration::from_millis(ms))
}

fn parse_u64(key: &'static str, value: &str) -> Result<u64, SettingsError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| SettingsError::InvalidValue {
            key,
            value: value.to_string(),
        })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
