//! Errors raised when a response body does not match its schema.

use thiserror::Error;

/// Malformed JSON or a payload missing required fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Body is not valid JSON or a field has the wrong type.
    #[error("invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    /// A field the dashboard depends on is absent or null.
    #[error("missing required field `{field}`")]
    MissingField { field: String },

    /// A history key could not be read as a date.
    #[error("invalid date `{value}` in history")]
    InvalidDate { value: String },
}

impl ParseError {
    pub fn invalid_json(url: &str, err: &serde_json::Error) -> Self {
        ParseError::InvalidJson {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        ParseError::MissingField {
            field: field.into(),
        }
    }

    /// True if this is a `MissingField` for exactly `field`.
    pub fn is_missing(&self, field: &str) -> bool {
        matches!(self, ParseError::MissingField { field: f } if f == field)
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ParseError::InvalidJson { .. } => "E_PARSE_JSON",
            ParseError::MissingField { .. } => "E_PARSE_FIELD",
            ParseError::InvalidDate { .. } => "E_PARSE_DATE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_keeps_serde_message() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ParseError::invalid_json("http://x/all", &serde_err);
        assert_eq!(err.error_code(), "E_PARSE_JSON");
        assert!(err.to_string().starts_with("invalid JSON from http://x/all"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ParseError::missing("countryInfo.iso2");
        assert_eq!(err.to_string(), "missing required field `countryInfo.iso2`");
        assert!(err.is_missing("countryInfo.iso2"));
        assert!(!err.is_missing("countryInfo"));
    }
}
