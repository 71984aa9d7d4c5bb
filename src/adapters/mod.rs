//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`mock::MockHttpClient`] - configurable responses for tests

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
