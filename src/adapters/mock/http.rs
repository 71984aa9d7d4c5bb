//! Mock HTTP client for testing.
//!
//! Returns canned responses per URL and records every request so tests can
//! assert which endpoints a flow touched.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// A 200 response with the given JSON text.
    pub fn json(body: impl Into<String>) -> Self {
        MockResponse::Success(Response::json_body(body))
    }

    /// An empty response with the given status.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, bytes::Bytes::new()))
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order is exact URL, then the longest configured prefix, then the
/// default response.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://disease.sh/v3/covid-19/all",
///     MockResponse::json(r#"{"cases":100}"#),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL (or URL prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// URLs of all recorded requests, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.url).collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so "/countries" does not shadow "/countries/FR"
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        self.default_response.lock().unwrap().clone()
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
