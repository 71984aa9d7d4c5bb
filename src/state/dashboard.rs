//! Dashboard state snapshot.
//!
//! Holds the fetched data slots, the user's selection, request bookkeeping
//! and the last error. Only the reducer mutates it.

use crate::error::{ErrorCategory, TrackerError};
use crate::models::{HistorySeries, MetricType, Region, RegionOption, RegionSummary};
use crate::shaping::SortedTableRow;

use super::requests::{DataSlot, RequestToken, RequestTracker};
use super::viewport::MapViewport;

/// What the user is looking at. Reset to defaults on every start.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSelection {
    pub selected_region: Region,
    pub metric: MetricType,
    pub viewport: MapViewport,
}

/// The in-flight summary fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub token: RequestToken,
    pub region: Region,
    /// Move the map once the result lands (false for the mount fetch)
    pub recenter: bool,
}

/// A fetch failure kept for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub slot: DataSlot,
    pub code: &'static str,
    pub category: ErrorCategory,
    pub message: String,
}

impl FetchFailure {
    pub fn new(slot: DataSlot, error: &TrackerError) -> Self {
        Self {
            slot,
            code: error.error_code(),
            category: error.category(),
            message: error.user_message(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub selection: ViewSelection,
    /// Aggregate counters source; `None` until the first summary arrives
    pub summary: Option<RegionSummary>,
    /// Country records in API order, used for map markers
    pub countries: Vec<RegionSummary>,
    /// Dropdown entries after the fixed worldwide entry
    pub options: Vec<RegionOption>,
    /// Countries ordered by cases
    pub table: Vec<SortedTableRow>,
    pub history: HistorySeries,
    pub requests: RequestTracker,
    pub summary_request: Option<SummaryRequest>,
    pub countries_loading: bool,
    pub history_loading: bool,
    pub last_error: Option<FetchFailure>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_region(&self) -> &Region {
        &self.selection.selected_region
    }

    pub fn metric(&self) -> MetricType {
        self.selection.metric
    }

    pub fn viewport(&self) -> MapViewport {
        self.selection.viewport
    }

    pub fn map_zoom(&self) -> f64 {
        self.selection.viewport.zoom
    }

    pub fn is_loading(&self) -> bool {
        self.summary_request.is_some() || self.countries_loading || self.history_loading
    }

    pub fn summary_loading(&self) -> bool {
        self.summary_request.is_some()
    }

    /// Full dropdown: the worldwide entry followed by every country.
    pub fn dropdown(&self) -> Vec<RegionOption> {
        std::iter::once(RegionOption::worldwide())
            .chain(self.options.iter().cloned())
            .collect()
    }

    /// Display name of the selected region, falling back to its code.
    pub fn selected_name(&self) -> String {
        match &self.selection.selected_region {
            Region::Worldwide => RegionOption::worldwide().display_name,
            Region::Country(iso) => self
                .options
                .iter()
                .find(|option| option.iso_code.eq_ignore_ascii_case(iso))
                .map(|option| option.display_name.clone())
                .unwrap_or_else(|| iso.clone()),
        }
    }
}
