//! The metric selector.

use std::fmt;

/// Which statistic drives the highlighted counter, marker sizes and graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricType {
    #[default]
    Cases,
    Recovered,
    Deaths,
}

impl MetricType {
    /// Counter display order.
    pub const ALL: [MetricType; 3] = [MetricType::Cases, MetricType::Recovered, MetricType::Deaths];

    /// Lowercase key, as used by the API's field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Cases => "cases",
            MetricType::Recovered => "recovered",
            MetricType::Deaths => "deaths",
        }
    }

    /// Counter title.
    pub fn title(&self) -> &'static str {
        match self {
            MetricType::Cases => "Coronavirus Cases",
            MetricType::Recovered => "Recovered",
            MetricType::Deaths => "Deaths",
        }
    }

    /// Cases and deaths use the red accent, recoveries the green one.
    pub fn is_red(&self) -> bool {
        !matches!(self, MetricType::Recovered)
    }

    /// Position in [`MetricType::ALL`].
    pub fn index(&self) -> usize {
        match self {
            MetricType::Cases => 0,
            MetricType::Recovered => 1,
            MetricType::Deaths => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cycle to the next metric
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous metric
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
