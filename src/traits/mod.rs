//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - read-only HTTP transport used by the stats API client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
