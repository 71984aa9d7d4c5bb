//! Unified error type for the dashboard.

use thiserror::Error;

use super::category::ErrorCategory;
use super::fetch::FetchError;
use super::parse::ParseError;

/// Any failure a data fetch can end in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::Fetch(e) => e.category(),
            TrackerError::Parse(_) => ErrorCategory::Data,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::Fetch(e) => e.error_code(),
            TrackerError::Parse(e) => e.error_code(),
        }
    }

    /// Message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            TrackerError::Fetch(e) => e.user_message(),
            TrackerError::Parse(_) => "Received statistics in an unexpected format".to_string(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, TrackerError::Parse(_))
    }
}

/// Result alias for fetch operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let fetch: TrackerError = FetchError::Timeout {
            url: "u".to_string(),
        }
        .into();
        let parse: TrackerError = ParseError::missing("cases").into();

        assert_eq!(fetch.category(), ErrorCategory::Network);
        assert_eq!(parse.category(), ErrorCategory::Data);
        assert!(parse.is_parse());
        assert!(!fetch.is_parse());
    }

    #[test]
    fn test_display_is_transparent() {
        let err: TrackerError = ParseError::missing("country").into();
        assert_eq!(err.to_string(), "missing required field `country`");
        assert_eq!(err.error_code(), "E_PARSE_FIELD");
    }
}
