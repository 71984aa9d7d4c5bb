//! Inputs to and outputs of the reducer.

use crate::error::TrackerError;
use crate::models::{HistorySeries, MetricType, Region, RegionSummary};

use super::requests::RequestToken;

/// Everything that can change dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The dashboard started; load everything.
    Mounted,
    /// The user picked a region in the dropdown.
    RegionSelected(Region),
    /// The user picked a metric counter.
    MetricSelected(MetricType),
    /// A summary fetch resolved.
    SummaryLoaded {
        token: RequestToken,
        summary: RegionSummary,
    },
    /// The country list fetch resolved.
    CountriesLoaded {
        token: RequestToken,
        countries: Vec<RegionSummary>,
    },
    /// The history fetch resolved.
    HistoryLoaded {
        token: RequestToken,
        history: HistorySeries,
    },
    /// Any fetch failed.
    FetchFailed {
        token: RequestToken,
        error: TrackerError,
    },
    /// The user dismissed the error in the status line.
    ErrorDismissed,
}

/// Side effects requested by the reducer. The app shell runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSummary { token: RequestToken, region: Region },
    FetchCountries { token: RequestToken },
    FetchHistory { token: RequestToken },
}

impl Effect {
    pub fn token(&self) -> RequestToken {
        match self {
            Effect::FetchSummary { token, .. }
            | Effect::FetchCountries { token }
            | Effect::FetchHistory { token } => *token,
        }
    }
}
