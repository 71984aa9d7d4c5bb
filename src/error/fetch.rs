//! Errors raised while talking to the stats API.

use thiserror::Error;

use crate::traits::HttpError;

use super::category::ErrorCategory;

/// Network failure or non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The API answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

impl FetchError {
    /// Wrap a transport error for the given URL.
    pub fn from_http(url: &str, err: HttpError) -> Self {
        match err {
            HttpError::Timeout(_) => FetchError::Timeout {
                url: url.to_string(),
            },
            other => FetchError::Transport {
                url: url.to_string(),
                message: other.to_string(),
            },
        }
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Timeout { url }
            | FetchError::HttpStatus { url, .. } => url,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Transport { .. } | FetchError::Timeout { .. } => ErrorCategory::Network,
            FetchError::HttpStatus { status, .. } if *status >= 500 => ErrorCategory::Server,
            FetchError::HttpStatus { .. } => ErrorCategory::Client,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "E_FETCH_TRANSPORT",
            FetchError::Timeout { .. } => "E_FETCH_TIMEOUT",
            FetchError::HttpStatus { .. } => "E_FETCH_HTTP",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Transport { .. } => "Unable to reach the stats service".to_string(),
            FetchError::Timeout { .. } => "The stats service did not answer in time".to_string(),
            FetchError::HttpStatus { status: 404, .. } => {
                "No statistics available for that region".to_string()
            }
            FetchError::HttpStatus { status, .. } => {
                format!("The stats service returned an error (HTTP {})", status)
            }
        }
    }
}
