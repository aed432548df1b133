//! Application-level configuration loading: score API location, session cache and timings.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the binary looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "WINDOW_WIPE_CONFIG_PATH";
/// Environment variable that overrides the score API base URL.
const API_URL_ENV: &str = "SCORE_API_URL";
/// Environment variable that overrides the session cache location.
const SESSION_PATH_ENV: &str = "WINDOW_WIPE_SESSION";
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_PATH: &str = "session.json";

/// Every delay used by the game view, in milliseconds of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long the spot stays hidden while it moves to a new cue.
    pub spot_settle: Duration,
    /// Delay between a correct press and the next cue.
    pub next_cue_delay: Duration,
    /// Delay before a displaced marker snaps back to rest.
    pub marker_reset: Duration,
    /// Period of the sync timer.
    pub sync_interval: Duration,
    /// How long a status message is shown before fading.
    pub status_display: Duration,
    /// Length of the fade-out window.
    pub status_fade: Duration,
    /// Upper bound on a single push to the score store.
    pub sync_timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            spot_settle: Duration::from_millis(100),
            next_cue_delay: Duration::from_millis(200),
            marker_reset: Duration::from_millis(200),
            sync_interval: Duration::from_millis(1000),
            status_display: Duration::from_millis(2000),
            status_fade: Duration::from_millis(300),
            sync_timeout: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone)]
/// Immutable runtime configuration.
pub struct AppConfig {
    api_base_url: String,
    session_path: PathBuf,
    timings: Timings,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to built-in defaults.
    ///
    /// Environment overrides are applied last.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_env_overrides()
    }

    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Base URL of the score API.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Location of the session cache file.
    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    /// Game and sync delays.
    pub fn timings(&self) -> Timings {
        self.timings
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(url) = non_empty_env(API_URL_ENV) {
            self.api_base_url = url;
        }
        if let Some(path) = non_empty_env(SESSION_PATH_ENV) {
            self.session_path = PathBuf::from(path);
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            timings: Timings::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    api_base_url: Option<String>,
    session_path: Option<PathBuf>,
    #[serde(default)]
    timings: RawTimings,
}

#[derive(Debug, Default, Deserialize)]
/// Millisecond overrides for [`Timings`].
struct RawTimings {
    spot_settle_ms: Option<u64>,
    next_cue_delay_ms: Option<u64>,
    marker_reset_ms: Option<u64>,
    sync_interval_ms: Option<u64>,
    status_display_ms: Option<u64>,
    status_fade_ms: Option<u64>,
    sync_timeout_ms: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            api_base_url: value.api_base_url.unwrap_or(defaults.api_base_url),
            session_path: value.session_path.unwrap_or(defaults.session_path),
            timings: value.timings.into(),
        }
    }
}

impl From<RawTimings> for Timings {
    fn from(value: RawTimings) -> Self {
        let defaults = Timings::default();
        let ms = |raw: Option<u64>, fallback: Duration| raw.map_or(fallback, Duration::from_millis);

        // tokio panics on a zero-period interval.
        let sync_interval = match value.sync_interval_ms {
            Some(0) => {
                warn!("sync_interval_ms must be positive; using the default");
                defaults.sync_interval
            }
            other => ms(other, defaults.sync_interval),
        };

        Self {
            spot_settle: ms(value.spot_settle_ms, defaults.spot_settle),
            next_cue_delay: ms(value.next_cue_delay_ms, defaults.next_cue_delay),
            marker_reset: ms(value.marker_reset_ms, defaults.marker_reset),
            sync_interval,
            status_display: ms(value.status_display_ms, defaults.status_display),
            status_fade: ms(value.status_fade_ms, defaults.status_fade),
            sync_timeout: ms(value.sync_timeout_ms, defaults.sync_timeout),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.timings(), Timings::default());
    }

    #[test]
    fn partial_timings_override_only_given_fields() {
        let config = AppConfig::from_json(
            r#"{"api_base_url": "https://wipe.example", "timings": {"sync_interval_ms": 250, "status_fade_ms": 0}}"#,
        )
        .unwrap();
        let timings = config.timings();
        assert_eq!(config.api_base_url(), "https://wipe.example");
        assert_eq!(timings.sync_interval, Duration::from_millis(250));
        assert_eq!(timings.status_fade, Duration::ZERO);
        assert_eq!(timings.status_display, Duration::from_millis(2000));
    }

    #[test]
    fn zero_sync_interval_is_rejected() {
        let config = AppConfig::from_json(r#"{"timings": {"sync_interval_ms": 0}}"#).unwrap();
        assert_eq!(config.timings().sync_interval, Duration::from_millis(1000));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(AppConfig::from_json(r#"{"timings": {"sync_interval_ms": "soon"}}"#).is_err());
    }
}
