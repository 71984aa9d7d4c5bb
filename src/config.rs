//! Runtime configuration.
//!
//! Use the builder methods to customize, or [`TrackerConfig::from_env`] to
//! pick up overrides from the environment.
//!
//! # Example
//!
//! ```ignore
//! use covtrack::config::TrackerConfig;
//!
//! let config = TrackerConfig::from_env()
//!     .with_api_base_url("http://localhost:3000")
//!     .with_history_days(30);
//! ```

use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

/// Env var overriding the API base URL.
pub const ENV_API_URL: &str = "COVTRACK_API_URL";
/// Env var overriding the number of history days.
pub const ENV_HISTORY_DAYS: &str = "COVTRACK_HISTORY_DAYS";
/// Env var setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COVTRACK_TIMEOUT_SECS";
/// Env var setting the UI tick interval in milliseconds.
pub const ENV_TICK_MS: &str = "COVTRACK_TICK_MS";
/// Env var holding a tracing filter directive.
pub const ENV_LOG: &str = "COVTRACK_LOG";

/// Shortest accepted tick interval.
pub const MIN_TICK_RATE: Duration = Duration::from_millis(10);

/// Log filter used when `COVTRACK_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "covtrack=info";

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Scheme and host of the stats API (default: https://disease.sh)
    pub api_base_url: String,
    /// Days of worldwide history for the graph (default: 120)
    pub history_days: u32,
    /// Per-request timeout; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// Interval of the UI tick that drives the loading spinner
    pub tick_rate: Duration,
    /// tracing filter directive (default: covtrack=info)
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            history_days: 120,
            request_timeout: None,
            tick_rate: Duration::from_millis(250),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the number of history days. Zero is bumped to one.
    pub fn with_history_days(mut self, days: u32) -> Self {
        self.history_days = days.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the tick interval, never below [`MIN_TICK_RATE`].
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate.max(MIN_TICK_RATE);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Unparseable values are
    /// ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_base_url(url.trim());
        }
        if let Some(days) = lookup(ENV_HISTORY_DAYS).and_then(|v| v.trim().parse().ok()) {
            config = config.with_history_days(days);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 {
                config = config.with_request_timeout(Some(Duration::from_secs(secs)));
            }
        }
        if let Some(ms) = lookup(ENV_TICK_MS).and_then(|v| v.trim().parse::<u64>().ok()) {
            config = config.with_tick_rate(Duration::from_millis(ms));
        }
        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }

        config
    }
}
