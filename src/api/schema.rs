//! Wire schemas for the disease.sh endpoints.
//!
//! Every payload is deserialized into an explicit struct and converted into
//! domain types here, so nothing past this module sees a loosely-typed value.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

use crate::error::ParseError;
use crate::models::{HistorySeries, RegionSummary, WORLDWIDE, WORLD_CENTER};

/// Format of the keys in the historical timeline (`1/22/20`).
const HISTORY_DATE_FORMAT: &str = "%m/%d/%y";

/// Country records may carry a null ISO code; list fetches skip those.
pub const ISO_CODE_FIELD: &str = "countryInfo.iso2";

/// Deserialize a count that may be an integer, a float, null or absent.
///
/// Negative corrections published by the API saturate to zero. Strings,
/// booleans and non-finite numbers are rejected.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative number or null")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(Some(u64::try_from(value).unwrap_or(0)))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            if !value.is_finite() {
                return Err(E::custom("count is not a finite number"));
            }
            Ok(Some(value.max(0.0) as u64))
        }

        fn visit_none<E>(self) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Option<u64>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

/// `countryInfo` object of a country record.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryInfoPayload {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

/// Body of `/all` and of each `/countries` record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPayload {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub cases: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub today_cases: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub deaths: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub today_deaths: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub recovered: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub today_recovered: Option<u64>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_info: Option<CountryInfoPayload>,
}

impl SummaryPayload {
    /// Convert the `/all` body. The aggregate sits at the world map center.
    pub fn into_global(self) -> RegionSummary {
        RegionSummary {
            name: "Worldwide".to_string(),
            iso_code: WORLDWIDE.to_string(),
            cases: self.cases,
            today_cases: self.today_cases,
            deaths: self.deaths,
            today_deaths: self.today_deaths,
            recovered: self.recovered,
            today_recovered: self.today_recovered,
            lat: WORLD_CENTER.lat,
            long: WORLD_CENTER.long,
        }
    }

    /// Convert a country record; name, ISO code and coordinates are required.
    pub fn into_country(self) -> Result<RegionSummary, ParseError> {
        let name = self
            .country
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ParseError::missing("country"))?;
        let info = self
            .country_info
            .ok_or_else(|| ParseError::missing("countryInfo"))?;
        let iso_code = info
            .iso2
            .filter(|iso| !iso.trim().is_empty())
            .ok_or_else(|| ParseError::missing(ISO_CODE_FIELD))?;
        let lat = info.lat.ok_or_else(|| ParseError::missing("countryInfo.lat"))?;
        let long = info
            .long
            .ok_or_else(|| ParseError::missing("countryInfo.long"))?;

        Ok(RegionSummary {
            name,
            iso_code,
            cases: self.cases,
            today_cases: self.today_cases,
            deaths: self.deaths,
            today_deaths: self.today_deaths,
            recovered: self.recovered,
            today_recovered: self.today_recovered,
            lat,
            long,
        })
    }
}

/// Body of `/historical/all`: cumulative totals keyed by `M/D/YY`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPayload {
    pub cases: HashMap<String, i64>,
    pub deaths: HashMap<String, i64>,
    #[serde(default)]
    pub recovered: HashMap<String, i64>,
}

impl HistoryPayload {
    pub fn into_series(self) -> Result<HistorySeries, ParseError> {
        Ok(HistorySeries {
            cases: timeline(self.cases)?,
            recovered: timeline(self.recovered)?,
            deaths: timeline(self.deaths)?,
        })
    }
}

fn timeline(raw: HashMap<String, i64>) -> Result<BTreeMap<NaiveDate, u64>, ParseError> {
    raw.into_iter()
        .map(|(key, value)| {
            let date = NaiveDate::parse_from_str(&key, HISTORY_DATE_FORMAT)
                .map_err(|_| ParseError::InvalidDate { value: key })?;
            Ok((date, u64::try_from(value).unwrap_or(0)))
        })
        .collect()
}
