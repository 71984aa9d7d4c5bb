//! Worldwide historical totals used by the line graph.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::metric::MetricType;

/// Cumulative totals per day, keyed by date so iteration is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistorySeries {
    pub cases: BTreeMap<NaiveDate, u64>,
    pub recovered: BTreeMap<NaiveDate, u64>,
    pub deaths: BTreeMap<NaiveDate, u64>,
}

impl HistorySeries {
    pub fn for_metric(&self, metric: MetricType) -> &BTreeMap<NaiveDate, u64> {
        match metric {
            MetricType::Cases => &self.cases,
            MetricType::Recovered => &self.recovered,
            MetricType::Deaths => &self.deaths,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.recovered.is_empty() && self.deaths.is_empty()
    }
}

/// One plotted point: new count for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: u64,
}
