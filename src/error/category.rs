//! Error category classification.
//!
//! Categories drive how an error is logged and which hint the status line
//! shows. Nothing in the dashboard retries automatically; the hint tells the
//! user whether re-selecting the region is likely to help.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems between us and the API.
    Network,

    /// The API answered with a 5xx status.
    Server,

    /// The API answered with a 4xx status (unknown country, bad path).
    Client,

    /// The API answered but the payload does not match the expected schema.
    Data,
}

impl ErrorCategory {
    /// Returns true if repeating the same request might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Data => "data",
        }
    }

    /// Returns a suggestion shown next to the error in the status line.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "check your connection and select the region again",
            ErrorCategory::Server => "the stats service is struggling, try again shortly",
            ErrorCategory::Client => "the region may not be tracked by the API",
            ErrorCategory::Data => "the API returned data in an unexpected shape",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
