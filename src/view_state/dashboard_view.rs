//! Render inputs derived from [`DashboardState`].

use crate::models::{ChartPoint, MetricType};
use crate::shaping::{
    build_chart_data, build_markers, format_total, pretty_print_stat, MapMarker, SortedTableRow,
};
use crate::state::{DashboardState, FetchFailure, MapViewport};

// ============================================================================
// CounterView
// ============================================================================

/// One aggregate counter box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub metric: MetricType,
    pub title: &'static str,
    /// Today's delta, e.g. "+5"
    pub today: String,
    /// Running total, e.g. "100"
    pub total: String,
    pub active: bool,
}

// ============================================================================
// MapView
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub viewport: MapViewport,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub metric: MetricType,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Markers whose center lies inside the visible bounds.
    pub fn visible_markers(&self) -> impl Iterator<Item = &MapMarker> {
        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        self.markers
            .iter()
            .filter(move |m| m.long >= x0 && m.long <= x1 && m.lat >= y0 && m.lat <= y1)
    }
}

// ============================================================================
// DashboardView
// ============================================================================

/// Everything the UI needs for one frame.
///
/// Borrowing the table avoids copying a couple hundred rows per frame;
/// counters, markers and the chart are small or metric-dependent and are
/// computed here.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub region_name: String,
    pub metric: MetricType,
    /// Always three counters in cases, recovered, deaths order
    pub counters: Vec<CounterView>,
    pub map: MapView,
    pub table: &'a [SortedTableRow],
    pub chart: Vec<ChartPoint>,
    pub loading: bool,
    pub error: Option<&'a FetchFailure>,
}

impl<'a> DashboardView<'a> {
    pub fn derive(state: &'a DashboardState) -> Self {
        let metric = state.metric();
        let summary = state.summary.as_ref();

        let counters = MetricType::ALL
            .iter()
            .map(|&m| CounterView {
                metric: m,
                title: m.title(),
                today: pretty_print_stat(summary.and_then(|s| s.today(m))),
                total: format_total(summary.and_then(|s| s.total(m))),
                active: m == metric,
            })
            .collect();

        let viewport = state.viewport();
        let map = MapView {
            viewport,
            x_bounds: viewport.x_bounds(),
            y_bounds: viewport.y_bounds(),
            metric,
            markers: build_markers(&state.countries, metric),
        };

        Self {
            region_name: state.selected_name(),
            metric,
            counters,
            map,
            table: &state.table,
            chart: build_chart_data(&state.history, metric),
            loading: state.is_loading(),
            error: state.last_error.as_ref(),
        }
    }

    pub fn active_counter(&self) -> Option<&CounterView> {
        self.counters.iter().find(|c| c.active)
    }

    /// Graph title, e.g. "Worldwide new cases".
    pub fn chart_title(&self) -> String {
        format!("Worldwide new {}", self.metric)
    }
}
