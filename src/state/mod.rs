//! ViewState: the dashboard state snapshot and the reducer that drives it.
//!
//! - [`DashboardState`] - fetched data, selection, request bookkeeping
//! - [`Event`] / [`Effect`] - reducer input and requested side effects
//! - [`reduce`] - `(state, event) -> (state, effects)`
//! - [`RequestTracker`] - per-slot generations so later requests win
//! - [`MapViewport`] - center/zoom and derived canvas bounds

mod dashboard;
mod events;
mod reducer;
mod requests;
mod viewport;

pub use dashboard::{DashboardState, FetchFailure, SummaryRequest, ViewSelection};
pub use events::{Effect, Event};
pub use reducer::reduce;
pub use requests::{DataSlot, RequestToken, RequestTracker};
pub use viewport::{MapViewport, DEFAULT_ZOOM, REGION_ZOOM};
