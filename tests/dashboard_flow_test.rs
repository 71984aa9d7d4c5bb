//! End-to-end dashboard flow: App + reducer + effects over a mocked API.

mod common;

use common::{mock_api, test_app, BASE_URL};
use covtrack::adapters::mock::MockResponse;
use covtrack::app::{App, AppMessage};
use covtrack::models::{MetricType, Region};
use covtrack::state::{DataSlot, REGION_ZOOM};
use covtrack::view_state::DashboardView;
use tokio::sync::mpsc::UnboundedReceiver;

/// Wait for `count` fetch results and return them in arrival order.
async fn collect(rx: &mut UnboundedReceiver<AppMessage>, count: usize) -> Vec<AppMessage> {
    let mut messages = Vec::with_capacity(count);
    for _ in 0..count {
        messages.push(rx.recv().await.expect("fetch task dropped its sender"));
    }
    messages
}

async fn settle(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, count: usize) {
    for message in collect(rx, count).await {
        app.handle_message(message);
    }
}

fn counters(app: &App) -> Vec<(String, String)> {
    DashboardView::derive(&app.state)
        .counters
        .into_iter()
        .map(|c| (c.today, c.total))
        .collect()
}

fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[tokio::test]
async fn test_mount_loads_every_slot() {
    let mock = mock_api();
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();

    app.mount();
    assert!(app.state.is_loading());
    settle(&mut app, &mut rx, 3).await;

    assert!(!app.state.is_loading());
    assert_eq!(counters(&app), pairs(&[("+5", "100"), ("+2", "50"), ("+1", "10")]));

    // Cruise ship without an ISO code is skipped
    assert_eq!(app.state.countries.len(), 3);
    let table: Vec<_> = app.state.table.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(table, vec!["Italy", "France", "Malta"]);

    let dropdown = app.state.dropdown();
    assert_eq!(dropdown[0].region(), Region::Worldwide);
    assert_eq!(dropdown.len(), 4);

    let view = DashboardView::derive(&app.state);
    let chart: Vec<_> = view.chart.iter().map(|p| p.value).collect();
    assert_eq!(chart, vec![10, 10]);
    assert_eq!(view.map.markers.len(), 3);
    assert!(app.state.viewport().is_default());

    let mut urls = mock.requested_urls();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            format!("{}/v3/covid-19/all", BASE_URL),
            format!("{}/v3/covid-19/countries", BASE_URL),
            format!("{}/v3/covid-19/historical/all?lastdays=120", BASE_URL),
        ]
    );
}

#[tokio::test]
async fn test_select_country_then_worldwide() {
    let mock = mock_api();
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    app.select_region(Region::from("FR"));
    assert_eq!(app.state.selected_region(), &Region::Country("FR".to_string()));
    // Previous counters stay until the new summary lands
    assert_eq!(counters(&app)[0], ("+5".to_string(), "100".to_string()));
    settle(&mut app, &mut rx, 1).await;

    assert_eq!(counters(&app), pairs(&[("+3", "300"), ("+2", "200"), ("+0", "30")]));
    assert_eq!(app.state.map_zoom(), REGION_ZOOM);
    assert_eq!(app.state.viewport().center.lat, 46.0);
    assert_eq!(app.state.selected_name(), "France");

    app.select_region(Region::Worldwide);
    settle(&mut app, &mut rx, 1).await;
    assert_eq!(counters(&app), pairs(&[("+5", "100"), ("+2", "50"), ("+1", "10")]));
    assert!(app.state.viewport().is_default());
}

#[tokio::test]
async fn test_later_selection_wins_regardless_of_arrival() {
    let mock = mock_api();
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();

    app.select_region(Region::from("FR"));
    app.select_region(Region::from("IT"));
    let mut messages = collect(&mut rx, 2).await;

    // Deliver the Italy result first, then the stale France one
    messages.sort_by_key(|m| std::cmp::Reverse(m.token().generation));
    for message in messages {
        app.handle_message(message);
    }

    let summary = app.state.summary.as_ref().unwrap();
    assert_eq!(summary.iso_code, "IT");
    assert_eq!(app.state.viewport().center.lat, 42.8333);
    assert!(!app.state.summary_loading());
}

#[tokio::test]
async fn test_failed_country_fetch_keeps_previous_data() {
    let mock = mock_api();
    mock.set_response(
        &format!("{}/v3/covid-19/countries/ZZ", BASE_URL),
        MockResponse::status(404),
    );
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    app.select_region(Region::from("ZZ"));
    settle(&mut app, &mut rx, 1).await;

    assert_eq!(counters(&app)[0], ("+5".to_string(), "100".to_string()));
    assert!(app.state.viewport().is_default());
    let failure = app.state.last_error.as_ref().unwrap();
    assert_eq!(failure.slot, DataSlot::Summary);
    assert_eq!(failure.message, "No statistics available for that region");

    app.clear_error();
    assert!(app.state.last_error.is_none());
}

#[tokio::test]
async fn test_malformed_history_surfaces_parse_error() {
    let mock = mock_api();
    mock.set_response(
        &format!("{}/v3/covid-19/historical/all", BASE_URL),
        MockResponse::json(r#"{"cases": {"yesterday": 1}, "deaths": {}}"#),
    );
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();
    settle(&mut app, &mut rx, 3).await;

    let failure = app.state.last_error.as_ref().unwrap();
    assert_eq!(failure.slot, DataSlot::History);
    assert_eq!(failure.code, "E_PARSE_DATE");
    assert!(app.state.history.is_empty());
    // The other slots loaded normally
    assert_eq!(app.state.table.len(), 3);
}

#[tokio::test]
async fn test_metric_switch_needs_no_fetch() {
    let mock = mock_api();
    let mut app = test_app(&mock);
    let mut rx = app.message_rx.take().unwrap();
    app.mount();
    settle(&mut app, &mut rx, 3).await;
    mock.clear_requests();

    app.select_metric(MetricType::Deaths);
    let view = DashboardView::derive(&app.state);
    assert_eq!(view.active_counter().unwrap().metric, MetricType::Deaths);
    assert_eq!(view.chart_title(), "Worldwide new deaths");
    let chart: Vec<_> = view.chart.iter().map(|p| p.value).collect();
    assert_eq!(chart, vec![1, 1]);
    assert!(mock.requested_urls().is_empty());
    assert!(rx.try_recv().is_err());
}
