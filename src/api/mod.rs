//! DataFetcher: typed access to the disease.sh statistics API.
//!
//! [`StatsClient`] issues one GET per call, validates the body against the
//! schemas in [`schema`] and returns domain types. There are no retries and
//! no cancellation; failures come back as [`crate::error::TrackerError`].

mod client;
pub mod schema;

pub use client::{StatsClient, DEFAULT_BASE_URL};
