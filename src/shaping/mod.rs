//! DataShaper: pure functions turning fetched records into display data.
//!
//! Nothing here touches state or I/O, so every function can be called from
//! the reducer, the view derivation and the snapshot printer alike.

mod chart;
mod format;
mod markers;
mod sort;

pub use chart::build_chart_data;
pub use format::{format_total, group_thousands, pretty_print_stat, PLACEHOLDER};
pub use markers::{build_markers, marker_radius, MapMarker, MAX_MARKER_RADIUS_DEG, METERS_PER_DEGREE};
pub use sort::{sort_data, SortedTableRow};
