//! AppMessage enum for async communication within the application.

use crate::error::TrackerResult;
use crate::models::{HistorySeries, RegionSummary};
use crate::state::{Event, RequestToken};

/// Results posted by fetch tasks back to the UI loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Summary fetch for a region finished
    SummaryFetched {
        token: RequestToken,
        result: TrackerResult<RegionSummary>,
    },
    /// Country list fetch finished
    CountriesFetched {
        token: RequestToken,
        result: TrackerResult<Vec<RegionSummary>>,
    },
    /// Worldwide history fetch finished
    HistoryFetched {
        token: RequestToken,
        result: TrackerResult<HistorySeries>,
    },
}

impl AppMessage {
    pub fn token(&self) -> RequestToken {
        match self {
            AppMessage::SummaryFetched { token, .. }
            | AppMessage::CountriesFetched { token, .. }
            | AppMessage::HistoryFetched { token, .. } => *token,
        }
    }
}

impl From<AppMessage> for Event {
    fn from(message: AppMessage) -> Self {
        match message {
            AppMessage::SummaryFetched { token, result } => match result {
                Ok(summary) => Event::SummaryLoaded { token, summary },
                Err(error) => Event::FetchFailed { token, error },
            },
            AppMessage::CountriesFetched { token, result } => match result {
                Ok(countries) => Event::CountriesLoaded { token, countries },
                Err(error) => Event::FetchFailed { token, error },
            },
            AppMessage::HistoryFetched { token, result } => match result {
                Ok(history) => Event::HistoryLoaded { token, history },
                Err(error) => Event::FetchFailed { token, error },
            },
        }
    }
}
