//! Stats API client.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::adapters::ReqwestHttpClient;
use crate::config::TrackerConfig;
use crate::error::{FetchError, ParseError, TrackerResult};
use crate::models::{HistorySeries, Region, RegionSummary};
use crate::traits::{Headers, HttpClient};

use super::schema::{HistoryPayload, SummaryPayload, ISO_CODE_FIELD};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://disease.sh";

/// Client for the `/v3/covid-19` endpoints.
///
/// Cheap to clone; clones share the underlying HTTP client so each spawned
/// fetch task can own one.
#[derive(Clone)]
pub struct StatsClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl std::fmt::Debug for StatsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl StatsClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Build the production client (reqwest transport) from config.
    pub fn from_config(config: &TrackerConfig) -> Self {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout);
        Self::new(Arc::new(http), config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn global_url(&self) -> String {
        format!("{}/v3/covid-19/all", self.base_url)
    }

    pub fn countries_url(&self) -> String {
        format!("{}/v3/covid-19/countries", self.base_url)
    }

    pub fn country_url(&self, iso_code: &str) -> String {
        format!("{}/v3/covid-19/countries/{}", self.base_url, iso_code)
    }

    pub fn history_url(&self, days: u32) -> String {
        format!(
            "{}/v3/covid-19/historical/all?lastdays={}",
            self.base_url, days
        )
    }

    /// GET `url` and decode a JSON body of type `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> TrackerResult<T> {
        let started = Instant::now();
        debug!("GET {}", url);

        let response = self
            .http
            .get(url, &Headers::new())
            .await
            .map_err(|e| FetchError::from_http(url, e))?;

        debug!(
            "GET {} -> {} in {}ms",
            url,
            response.status,
            started.elapsed().as_millis()
        );

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            }
            .into());
        }

        response
            .json::<T>()
            .map_err(|e| ParseError::invalid_json(url, &e).into())
    }

    /// Worldwide totals.
    pub async fn fetch_global(&self) -> TrackerResult<RegionSummary> {
        let payload: SummaryPayload = self.get_json(&self.global_url()).await?;
        Ok(payload.into_global())
    }

    /// Every country the API tracks, in API order.
    ///
    /// Records without an ISO code (cruise ships) cannot be selected or
    /// placed reliably and are skipped. Any other schema mismatch fails the
    /// whole list.
    pub async fn fetch_all_countries(&self) -> TrackerResult<Vec<RegionSummary>> {
        let payloads: Vec<SummaryPayload> = self.get_json(&self.countries_url()).await?;
        let total = payloads.len();

        let mut countries = Vec::with_capacity(total);
        for payload in payloads {
            let name = payload.country.clone();
            match payload.into_country() {
                Ok(summary) => countries.push(summary),
                Err(e) if e.is_missing(ISO_CODE_FIELD) => {
                    debug!("Skipping country record {:?}: {}", name, e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!("Loaded {} of {} country records", countries.len(), total);
        Ok(countries)
    }

    /// One country by ISO code.
    pub async fn fetch_country(&self, iso_code: &str) -> TrackerResult<RegionSummary> {
        let payload: SummaryPayload = self.get_json(&self.country_url(iso_code)).await?;
        Ok(payload.into_country()?)
    }

    /// Global endpoint for the sentinel, country endpoint otherwise.
    pub async fn fetch_region(&self, region: &Region) -> TrackerResult<RegionSummary> {
        match region {
            Region::Worldwide => self.fetch_global().await,
            Region::Country(iso) => self.fetch_country(iso).await,
        }
    }

    /// Worldwide cumulative totals for the last `days` days.
    pub async fn fetch_history(&self, days: u32) -> TrackerResult<HistorySeries> {
        let payload: HistoryPayload = self.get_json(&self.history_url(days)).await?;
        Ok(payload.into_series()?)
    }
}
