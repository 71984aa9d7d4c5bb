//! Domain types shared by the API client, the reducer and the UI.

mod history;
mod metric;
mod region;

pub use history::{ChartPoint, HistorySeries};
pub use metric::MetricType;
pub use region::{LatLong, Region, RegionOption, RegionSummary, WORLDWIDE, WORLD_CENTER};
