//! UI rendering for the dashboard
//!
//! ```text
//! ┌ header: title ─────────────────────────────── region ▾ ┐
//! │ [ cases ]          [ recovered ]        [ deaths ]     │
//! │ ┌ map ───────────────────────┐ ┌ table ──────────────┐ │
//! │ │                            │ └─────────────────────┘ │
//! │ │                            │ ┌ graph ──────────────┐ │
//! │ └────────────────────────────┘ └─────────────────────┘ │
//! └ status: loading / error ───────────────────── key hints┘
//! ```
//!
//! Every surface draws from a [`DashboardView`] derived once per frame; the
//! region picker overlays everything while it has focus.

mod counters;
mod graph;
mod header;
mod helpers;
mod map;
mod region_picker;
mod status_bar;
mod table;
mod theme;

pub use theme::{
    metric_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GREEN, COLOR_HEADER,
    COLOR_RED,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, Focus};
use crate::view_state::DashboardView;

/// Counter boxes: border, today, total, border
const COUNTER_HEIGHT: u16 = 4;

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub counters: Rect,
    pub map: Rect,
    pub table: Rect,
    pub graph: Rect,
    pub status: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let [header, counters, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(COUNTER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [map, side] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(body);
        let [table, graph] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(side);

        Self {
            header,
            counters,
            map,
            table,
            graph,
            status,
        }
    }
}

/// Render the whole dashboard and record counter hit areas on the app.
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = DashboardLayout::new(frame.area());
    let view = DashboardView::derive(&app.state);

    header::render(frame, layout.header, &view);
    app.counter_areas = counters::render(frame, layout.counters, &view);
    map::render(frame, layout.map, &view.map);
    table::render(
        frame,
        layout.table,
        view.table,
        app.table_offset,
        app.state.countries_loading,
    );
    graph::render(frame, layout.graph, &view);
    status_bar::render(frame, layout.status, &view, app.tick_count);

    if app.focus == Focus::RegionPicker {
        let options = app.state.dropdown();
        let selected_iso = app.state.selected_region().code();
        region_picker::render(frame, &mut app.picker, &options, selected_iso);
    }
}
