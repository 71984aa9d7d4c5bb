//! covtrack - a terminal dashboard for global and per-country COVID-19
//! statistics from the disease.sh API.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod shaping;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
