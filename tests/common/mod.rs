//! Common fixtures for integration tests.
//!
//! Payloads mirror the disease.sh response shapes; `mock_api` wires them
//! into a `MockHttpClient` under `BASE_URL`.

#![allow(dead_code)]

use std::sync::Arc;

use covtrack::adapters::mock::{MockHttpClient, MockResponse};
use covtrack::api::StatsClient;
use covtrack::app::App;
use covtrack::config::TrackerConfig;

pub const BASE_URL: &str = "http://stats.test";

pub const GLOBAL_JSON: &str = r#"{
    "updated": 1650000000000,
    "cases": 100, "todayCases": 5,
    "deaths": 10, "todayDeaths": 1,
    "recovered": 50, "todayRecovered": 2,
    "active": 40, "affectedCountries": 3
}"#;

pub const FRANCE_JSON: &str = r#"{
    "country": "France",
    "countryInfo": {"_id": 250, "iso2": "FR", "iso3": "FRA", "lat": 46, "long": 2},
    "cases": 300, "todayCases": 3,
    "deaths": 30, "todayDeaths": 0,
    "recovered": 200, "todayRecovered": 2
}"#;

pub const ITALY_JSON: &str = r#"{
    "country": "Italy",
    "countryInfo": {"_id": 380, "iso2": "IT", "iso3": "ITA", "lat": 42.8333, "long": 12.8333},
    "cases": 700, "todayCases": 7,
    "deaths": 70, "todayDeaths": 1,
    "recovered": 600, "todayRecovered": 6
}"#;

pub const COUNTRIES_JSON: &str = r#"[
    {"country": "Malta",
     "countryInfo": {"iso2": "MT", "lat": 35.8333, "long": 14.5833},
     "cases": 5, "todayCases": 0, "deaths": 0, "todayDeaths": 0, "recovered": 5, "todayRecovered": 0},
    {"country": "France",
     "countryInfo": {"iso2": "FR", "lat": 46, "long": 2},
     "cases": 300, "todayCases": 3, "deaths": 30, "todayDeaths": 0, "recovered": 200, "todayRecovered": 2},
    {"country": "Diamond Princess",
     "countryInfo": {"iso2": null, "lat": 0, "long": 0},
     "cases": 712, "todayCases": 0, "deaths": 13, "todayDeaths": 0, "recovered": 699, "todayRecovered": 0},
    {"country": "Italy",
     "countryInfo": {"iso2": "IT", "lat": 42.8333, "long": 12.8333},
     "cases": 700, "todayCases": 7, "deaths": 70, "todayDeaths": 1, "recovered": 600, "todayRecovered": 6}
]"#;

pub const HISTORY_JSON: &str = r#"{
    "cases": {"3/1/21": 80, "3/2/21": 90, "3/3/21": 100},
    "deaths": {"3/1/21": 8, "3/2/21": 9, "3/3/21": 10},
    "recovered": {"3/1/21": 40, "3/2/21": 45, "3/3/21": 50}
}"#;

/// Mock transport answering every endpoint the dashboard uses.
pub fn mock_api() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        &format!("{}/v3/covid-19/all", BASE_URL),
        MockResponse::json(GLOBAL_JSON),
    );
    mock.set_response(
        &format!("{}/v3/covid-19/countries", BASE_URL),
        MockResponse::json(COUNTRIES_JSON),
    );
    mock.set_response(
        &format!("{}/v3/covid-19/countries/FR", BASE_URL),
        MockResponse::json(FRANCE_JSON),
    );
    mock.set_response(
        &format!("{}/v3/covid-19/countries/IT", BASE_URL),
        MockResponse::json(ITALY_JSON),
    );
    mock.set_response(
        &format!("{}/v3/covid-19/historical/all", BASE_URL),
        MockResponse::json(HISTORY_JSON),
    );
    mock
}

pub fn stats_client(mock: &MockHttpClient) -> StatsClient {
    StatsClient::new(Arc::new(mock.clone()), BASE_URL)
}

/// App wired to `mock`.
pub fn test_app(mock: &MockHttpClient) -> App {
    App::with_client(stats_client(mock), TrackerConfig::default())
}
