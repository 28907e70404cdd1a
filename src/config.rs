//! # Portal Configuration
//!
//! Settings are read from the environment once at startup. Every variable has a
//! default; a variable that is present but malformed is a hard [`ConfigError`]
//! instead of a silent fallback.
//!
//! | Variable | Default |
//! |---|---|
//! | `CLOUDHUB_HTTP_PREFIX` | `http://` |
//! | `CLOUDHUB_BASE_URL` | `localhost:7010` |
//! | `CLOUDHUB_REQUEST_TIMEOUT_SECS` | `30` |
//! | `CLOUDHUB_APP_TITLE` | `Cloudhub Personal File Library` |
//! | `CLOUDHUB_TITLE_SUFFIX` | ` \| Cloudhub Personal File Library` |

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_HTTP_PREFIX: &str = "http://";
pub const DEFAULT_BASE_HOST: &str = "localhost:7010";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_APP_TITLE: &str = "Cloudhub Personal File Library";
pub const DEFAULT_TITLE_SUFFIX: &str = " | Cloudhub Personal File Library";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Titles applied to the document after each navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleConfig {
    /// Used when the target route carries no title.
    pub default_title: String,
    /// Appended to route titles not flagged as final.
    pub suffix: String,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_APP_TITLE.to_string(),
            suffix: DEFAULT_TITLE_SUFFIX.to_string(),
        }
    }
}

/// Complete runtime configuration of the portal.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    /// Scheme prefix for HTTP calls, e.g. `https://`.
    pub http_prefix: String,
    /// Host (and optional path) of the backend, without scheme.
    pub base_host: String,
    pub request_timeout: Duration,
    pub titles: TitleConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            http_prefix: DEFAULT_HTTP_PREFIX.to_string(),
            base_host: DEFAULT_BASE_HOST.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            titles: TitleConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Loads the configuration from `CLOUDHUB_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure so they never
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = try_load(
            &lookup,
            "CLOUDHUB_REQUEST_TIMEOUT_SECS",
            DEFAULT_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CLOUDHUB_REQUEST_TIMEOUT_SECS".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Self {
            http_prefix: load_string(&lookup, "CLOUDHUB_HTTP_PREFIX", DEFAULT_HTTP_PREFIX),
            base_host: load_string(&lookup, "CLOUDHUB_BASE_URL", DEFAULT_BASE_HOST),
            request_timeout: Duration::from_secs(timeout_secs),
            titles: TitleConfig {
                default_title: load_string(&lookup, "CLOUDHUB_APP_TITLE", DEFAULT_APP_TITLE),
                suffix: load_string(&lookup, "CLOUDHUB_TITLE_SUFFIX", DEFAULT_TITLE_SUFFIX),
            },
        })
    }

    /// `{http_prefix}{base_host}`, the root every REST endpoint hangs off.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.http_prefix, self.base_host)
    }

    /// Websocket root for the same backend host.
    pub fn ws_base_url(&self) -> String {
        format!("ws://{}", self.base_host)
    }
}

fn load_string<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::InvalidValue {
                key: key.to_string(),
                reason: e.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = PortalConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.base_url(), "http://localhost:7010");
        assert_eq!(config.ws_base_url(), "ws://localhost:7010");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            ("CLOUDHUB_HTTP_PREFIX", "https://"),
            ("CLOUDHUB_BASE_URL", "disk.example.org"),
            ("CLOUDHUB_REQUEST_TIMEOUT_SECS", "5"),
            ("CLOUDHUB_APP_TITLE", "Disk"),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "https://disk.example.org");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.titles.default_title, "Disk");
        assert_eq!(config.titles.suffix, DEFAULT_TITLE_SUFFIX);
    }

    #[test]
    fn test_malformed_timeout_is_rejected() {
        let result = PortalConfig::from_lookup(lookup_from(&[(
            "CLOUDHUB_REQUEST_TIMEOUT_SECS",
            "soon",
        )]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref key, .. }) if key == "CLOUDHUB_REQUEST_TIMEOUT_SECS"
        ));

        let zero =
            PortalConfig::from_lookup(lookup_from(&[("CLOUDHUB_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(zero.is_err());
    }
}
