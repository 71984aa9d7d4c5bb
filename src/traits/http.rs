//! HTTP client trait abstraction.
//!
//! The stats API only ever issues GET requests, so the seam is a single
//! async `get`. Production code plugs in the reqwest adapter, tests plug in
//! [`crate::adapters::mock::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a 200 response carrying a JSON body.
    pub fn json_body(body: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::with_headers(200, headers, Bytes::from(body.into()))
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level HTTP errors.
///
/// Status codes are not errors at this layer; the caller decides what a
/// non-2xx [`Response`] means.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Body could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// Other error
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for read-only HTTP operations.
///
/// # Example
///
/// ```ignore
/// use covtrack::traits::{HttpClient, Headers};
///
/// async fn fetch_all<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("https://disease.sh/v3/covid-19/all", &Headers::new()).await?;
///     Ok(String::from_utf8_lossy(&response.body).into_owned())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
