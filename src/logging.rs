//! tracing subscriber setup.
//!
//! The TUI owns the terminal, so its logs go to
//! `<cache dir>/covtrack/covtrack.log`. Snapshot mode writes to stderr.
//! Both read their filter from `TrackerConfig::log_filter` (`COVTRACK_LOG`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{TrackerConfig, DEFAULT_LOG_FILTER};

const LOG_DIR: &str = "covtrack";
const LOG_FILE: &str = "covtrack.log";

/// Where the TUI log file lives, if the platform has a cache directory.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Parse a filter directive, falling back to the default on garbage.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Append TUI logs to the cache-dir log file.
///
/// Returns the file path, or `None` when there is no cache directory (logs
/// are then discarded).
pub fn init_file_logging(config: &TrackerConfig) -> Result<Option<PathBuf>> {
    let Some(path) = log_file_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()?;

    Ok(Some(path))
}

/// Log to stderr, for commands that leave stdout to their report.
pub fn init_stderr_logging(config: &TrackerConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_keeps_valid_directive() {
        let filter = build_filter("covtrack=debug");
        assert_eq!(filter.to_string().to_lowercase(), "covtrack=debug");
    }

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        let filter = build_filter("covtrack=verbose");
        assert_eq!(filter.to_string().to_lowercase(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_log_file_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("covtrack/covtrack.log"));
        }
    }
}
