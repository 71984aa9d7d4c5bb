//! The reducer: `(state, event) -> (state, effects)`.
//!
//! Every transition of the dashboard happens here, synchronously and
//! without I/O. Fetches are requested as [`Effect`]s and their results come
//! back as events tagged with the token they were issued with.

use tracing::{debug, info, warn};

use crate::models::{Region, RegionOption};
use crate::shaping::sort_data;

use super::dashboard::{DashboardState, FetchFailure, SummaryRequest};
use super::events::{Effect, Event};
use super::requests::{DataSlot, RequestToken};
use super::viewport::MapViewport;

/// Pure form of [`DashboardState::apply`].
pub fn reduce(state: &DashboardState, event: Event) -> (DashboardState, Vec<Effect>) {
    let mut next = state.clone();
    let effects = next.apply(event);
    (next, effects)
}

impl DashboardState {
    /// Apply one event in place and return the effects it requests.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Mounted => self.on_mounted(),
            Event::RegionSelected(region) => self.on_region_selected(region),
            Event::MetricSelected(metric) => {
                if self.selection.metric != metric {
                    debug!("Metric {} -> {}", self.selection.metric, metric);
                    self.selection.metric = metric;
                }
                Vec::new()
            }
            Event::SummaryLoaded { token, summary } => {
                let Some(request) = self.take_summary_request(token) else {
                    return Vec::new();
                };
                if request.recenter {
                    self.selection.viewport = if request.region.is_worldwide() {
                        MapViewport::default()
                    } else {
                        MapViewport::focused_on(summary.coordinates())
                    };
                }
                info!("Summary for {} loaded", request.region);
                self.summary = Some(summary);
                Vec::new()
            }
            Event::CountriesLoaded { token, countries } => {
                if !self.accept(token) {
                    return Vec::new();
                }
                self.countries_loading = false;
                self.options = countries.iter().map(RegionOption::from).collect();
                self.table = sort_data(&countries);
                self.countries = countries;
                info!("{} countries loaded", self.countries.len());
                Vec::new()
            }
            Event::HistoryLoaded { token, history } => {
                if !self.accept(token) {
                    return Vec::new();
                }
                self.history_loading = false;
                self.history = history;
                Vec::new()
            }
            Event::FetchFailed { token, error } => {
                if !self.accept(token) {
                    return Vec::new();
                }
                warn!(
                    "Fetch {} failed [{}] ({}): {}",
                    token,
                    error.error_code(),
                    error.category(),
                    error
                );
                match token.slot {
                    DataSlot::Summary => self.summary_request = None,
                    DataSlot::Countries => self.countries_loading = false,
                    DataSlot::History => self.history_loading = false,
                }
                self.last_error = Some(FetchFailure::new(token.slot, &error));
                Vec::new()
            }
            Event::ErrorDismissed => {
                self.last_error = None;
                Vec::new()
            }
        }
    }

    fn on_mounted(&mut self) -> Vec<Effect> {
        let summary = self.issue_summary(Region::Worldwide, false);
        let countries = self.requests.issue(DataSlot::Countries);
        let history = self.requests.issue(DataSlot::History);
        self.countries_loading = true;
        self.history_loading = true;

        vec![
            summary,
            Effect::FetchCountries { token: countries },
            Effect::FetchHistory { token: history },
        ]
    }

    fn on_region_selected(&mut self, region: Region) -> Vec<Effect> {
        debug!(
            "Region {} -> {}",
            self.selection.selected_region, region
        );
        self.selection.selected_region = region.clone();
        vec![self.issue_summary(region, true)]
    }

    fn issue_summary(&mut self, region: Region, recenter: bool) -> Effect {
        let token = self.requests.issue(DataSlot::Summary);
        self.summary_request = Some(SummaryRequest {
            token,
            region: region.clone(),
            recenter,
        });
        Effect::FetchSummary { token, region }
    }

    /// Claim the in-flight summary request if `token` is the current one.
    fn take_summary_request(&mut self, token: RequestToken) -> Option<SummaryRequest> {
        if !self.accept(token) {
            return None;
        }
        match self.summary_request.take() {
            Some(request) if request.token == token => Some(request),
            other => {
                self.summary_request = other;
                None
            }
        }
    }

    /// True if `token` is the latest issued for its slot.
    fn accept(&self, token: RequestToken) -> bool {
        let current = self.requests.is_current(token);
        if !current {
            debug!(
                "Dropping stale result {} (latest {})",
                token,
                self.requests.latest(token.slot)
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, TrackerError};
    use crate::models::{MetricType, RegionSummary};
    use crate::state::viewport::{DEFAULT_ZOOM, REGION_ZOOM};

    fn france() -> RegionSummary {
        RegionSummary {
            name: "France".to_string(),
            iso_code: "FR".to_string(),
            cases: Some(300),
            today_cases: Some(3),
            deaths: Some(30),
            today_deaths: Some(0),
            recovered: Some(200),
            today_recovered: Some(2),
            lat: 46.0,
            long: 2.0,
        }
    }

    fn global() -> RegionSummary {
        RegionSummary {
            name: "Worldwide".to_string(),
            iso_code: "worldwide".to_string(),
            cases: Some(100),
            ..Default::default()
        }
    }

    fn summary_token(effects: &[Effect]) -> RequestToken {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::FetchSummary { token, .. } => Some(*token),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_mount_requests_all_slots() {
        let (state, effects) = reduce(&DashboardState::new(), Event::Mounted);
        assert_eq!(effects.len(), 3);
        assert!(matches!(
            &effects[0],
            Effect::FetchSummary { region: Region::Worldwide, .. }
        ));
        assert!(matches!(effects[1], Effect::FetchCountries { .. }));
        assert!(matches!(effects[2], Effect::FetchHistory { .. }));
        assert!(state.summary_loading());
        assert!(state.countries_loading);
        assert!(state.history_loading);
    }

    #[test]
    fn test_mount_summary_does_not_move_map() {
        let (state, effects) = reduce(&DashboardState::new(), Event::Mounted);
        let token = summary_token(&effects);
        let (state, _) = reduce(&state, Event::SummaryLoaded { token, summary: global() });
        assert_eq!(state.map_zoom(), DEFAULT_ZOOM);
        assert_eq!(state.summary.as_ref().unwrap().cases, Some(100));
        assert!(!state.summary_loading());
    }

    #[test]
    fn test_region_selection_flow() {
        let state = DashboardState::new();
        let (state, effects) = reduce(&state, Event::RegionSelected(Region::from("FR")));

        assert_eq!(state.selected_region(), &Region::Country("FR".to_string()));
        assert!(state.summary.is_none(), "counters only change once data arrives");

        let token = summary_token(&effects);
        let (state, _) = reduce(&state, Event::SummaryLoaded { token, summary: france() });
        assert_eq!(state.summary.as_ref().unwrap().cases, Some(300));
        assert_eq!(state.map_zoom(), REGION_ZOOM);
        assert_eq!(state.viewport().center.lat, 46.0);
    }

    #[test]
    fn test_worldwide_after_country_restores_default_view() {
        let (state, effects) = reduce(&DashboardState::new(), Event::RegionSelected(Region::from("FR")));
        let token = summary_token(&effects);
        let (state, _) = reduce(&state, Event::SummaryLoaded { token, summary: france() });

        let (state, effects) = reduce(&state, Event::RegionSelected(Region::Worldwide));
        let token = summary_token(&effects);
        let (state, _) = reduce(&state, Event::SummaryLoaded { token, summary: global() });

        assert_eq!(state.summary.as_ref().unwrap().cases, Some(100));
        assert!(state.viewport().is_default());
    }

    #[test]
    fn test_metric_selection_is_synchronous_and_idempotent() {
        let state = DashboardState::new();
        let (next, effects) = reduce(&state, Event::MetricSelected(MetricType::Deaths));
        assert!(effects.is_empty());
        assert_eq!(next.metric(), MetricType::Deaths);

        let (again, effects) = reduce(&next, Event::MetricSelected(MetricType::Deaths));
        assert!(effects.is_empty());
        assert_eq!(again, next);
    }

    #[test]
    fn test_countries_loaded_populates_derived_slots() {
        let (state, effects) = reduce(&DashboardState::new(), Event::Mounted);
        let token = effects[1].token();
        let small = RegionSummary {
            name: "Malta".to_string(),
            iso_code: "MT".to_string(),
            cases: Some(5),
            ..Default::default()
        };
        let (state, _) = reduce(
            &state,
            Event::CountriesLoaded {
                token,
                countries: vec![small, france()],
            },
        );

        assert_eq!(state.options.len(), 2);
        assert_eq!(state.options[0].iso_code, "MT");
        assert_eq!(state.table[0].name, "France");
        assert_eq!(state.countries.len(), 2);
        assert!(!state.countries_loading);
    }

    #[test]
    fn test_stale_summary_is_dropped() {
        let state = DashboardState::new();
        let (state, first) = reduce(&state, Event::RegionSelected(Region::from("FR")));
        let (state, second) = reduce(&state, Event::RegionSelected(Region::from("IT")));
        let italy = RegionSummary {
            name: "Italy".to_string(),
            iso_code: "IT".to_string(),
            cases: Some(700),
            lat: 42.8,
            long: 12.8,
            ..Default::default()
        };

        // Later request resolves first
        let (state, _) = reduce(
            &state,
            Event::SummaryLoaded {
                token: summary_token(&second),
                summary: italy,
            },
        );
        // Earlier request arrives late and must not overwrite
        let (state, _) = reduce(
            &state,
            Event::SummaryLoaded {
                token: summary_token(&first),
                summary: france(),
            },
        );

        assert_eq!(state.summary.as_ref().unwrap().iso_code, "IT");
        assert_eq!(state.viewport().center.lat, 42.8);
    }

    #[test]
    fn test_failure_keeps_prior_state() {
        let (state, effects) = reduce(&DashboardState::new(), Event::RegionSelected(Region::from("FR")));
        let (state, _) = reduce(
            &state,
            Event::SummaryLoaded {
                token: summary_token(&effects),
                summary: france(),
            },
        );

        let (state, effects) = reduce(&state, Event::RegionSelected(Region::from("ZZ")));
        let error: TrackerError = FetchError::HttpStatus {
            url: "u".to_string(),
            status: 404,
        }
        .into();
        let (state, _) = reduce(
            &state,
            Event::FetchFailed {
                token: summary_token(&effects),
                error,
            },
        );

        assert_eq!(state.summary.as_ref().unwrap().iso_code, "FR");
        assert_eq!(state.map_zoom(), REGION_ZOOM);
        assert!(!state.summary_loading());
        let failure = state.last_error.as_ref().unwrap();
        assert_eq!(failure.slot, DataSlot::Summary);
        assert_eq!(failure.code, "E_FETCH_HTTP");

        let (state, _) = reduce(&state, Event::ErrorDismissed);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let (state, first) = reduce(&DashboardState::new(), Event::RegionSelected(Region::from("FR")));
        let (state, _) = reduce(&state, Event::RegionSelected(Region::from("IT")));
        let error: TrackerError = FetchError::Timeout { url: "u".to_string() }.into();

        let (next, _) = reduce(
            &state,
            Event::FetchFailed {
                token: summary_token(&first),
                error,
            },
        );
        assert_eq!(next, state);
    }
}
