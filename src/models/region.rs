//! Regions and their statistics snapshots.

use std::fmt;

use super::metric::MetricType;

/// Dropdown value that stands for the worldwide aggregate.
pub const WORLDWIDE: &str = "worldwide";

/// Map center of the global view. Also the coordinates of the worldwide
/// aggregate, which the API does not locate.
pub const WORLD_CENTER: LatLong = LatLong::new(34.80746, -40.4796);

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub const fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// A country or the worldwide aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Worldwide,
    /// ISO 3166-1 alpha-2 code as served by the API
    Country(String),
}

impl Region {
    /// Parse a dropdown value. The sentinel is matched case-insensitively.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() || code.eq_ignore_ascii_case(WORLDWIDE) {
            Region::Worldwide
        } else {
            Region::Country(code.to_string())
        }
    }

    /// The dropdown value for this region.
    pub fn code(&self) -> &str {
        match self {
            Region::Worldwide => WORLDWIDE,
            Region::Country(iso) => iso,
        }
    }

    pub fn is_worldwide(&self) -> bool {
        matches!(self, Region::Worldwide)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Region {
    fn from(code: &str) -> Self {
        Region::from_code(code)
    }
}

/// Statistics for one region at the time of the fetch.
///
/// Counts the API omitted are `None`; the display layer turns them into
/// placeholders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionSummary {
    pub name: String,
    /// ISO code, or [`WORLDWIDE`] for the aggregate
    pub iso_code: String,
    pub cases: Option<u64>,
    pub today_cases: Option<u64>,
    pub deaths: Option<u64>,
    pub today_deaths: Option<u64>,
    pub recovered: Option<u64>,
    pub today_recovered: Option<u64>,
    pub lat: f64,
    pub long: f64,
}

impl RegionSummary {
    /// Running total for the metric.
    pub fn total(&self, metric: MetricType) -> Option<u64> {
        match metric {
            MetricType::Cases => self.cases,
            MetricType::Recovered => self.recovered,
            MetricType::Deaths => self.deaths,
        }
    }

    /// Today's delta for the metric.
    pub fn today(&self, metric: MetricType) -> Option<u64> {
        match metric {
            MetricType::Cases => self.today_cases,
            MetricType::Recovered => self.today_recovered,
            MetricType::Deaths => self.today_deaths,
        }
    }

    pub fn region(&self) -> Region {
        Region::from_code(&self.iso_code)
    }

    pub fn coordinates(&self) -> LatLong {
        LatLong::new(self.lat, self.long)
    }
}

/// One entry of the region dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    pub display_name: String,
    pub iso_code: String,
}

impl RegionOption {
    /// The fixed first entry of the dropdown.
    pub fn worldwide() -> Self {
        Self {
            display_name: "Global".to_string(),
            iso_code: WORLDWIDE.to_string(),
        }
    }

    pub fn region(&self) -> Region {
        Region::from_code(&self.iso_code)
    }
}

impl From<&RegionSummary> for RegionOption {
    fn from(summary: &RegionSummary) -> Self {
        Self {
            display_name: summary.name.clone(),
            iso_code: summary.iso_code.clone(),
        }
    }
}
