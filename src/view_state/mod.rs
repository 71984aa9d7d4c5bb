//! View-only data derived from the dashboard state.
//!
//! `ui::render` derives a [`DashboardView`] from the
//! [`crate::state::DashboardState`] once per frame; every dashboard surface
//! draws from the view alone.
//!
//! ```text
//! DashboardState --derive()--> DashboardView --ui::render()--> Frame
//! ```

mod dashboard_view;

pub use dashboard_view::{CounterView, DashboardView, MapView};
