//! Line graph series.

use crate::models::{ChartPoint, HistorySeries, MetricType};

/// Daily new counts for `metric`.
///
/// The API serves cumulative totals; each point is the difference to the
/// previous day. The first day has no predecessor and is dropped. Downward
/// corrections clamp to zero.
pub fn build_chart_data(history: &HistorySeries, metric: MetricType) -> Vec<ChartPoint> {
    let timeline = history.for_metric(metric);
    let mut points = Vec::with_capacity(timeline.len().saturating_sub(1));
    let mut previous: Option<u64> = None;

    for (date, total) in timeline {
        if let Some(prev) = previous {
            points.push(ChartPoint {
                date: *date,
                value: total.saturating_sub(prev),
            });
        }
        previous = Some(*total);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, d).unwrap()
    }

    fn history() -> HistorySeries {
        let mut history = HistorySeries::default();
        history.cases.extend([(day(1), 100), (day(2), 130), (day(3), 125), (day(4), 200)]);
        history.deaths.extend([(day(1), 10), (day(2), 12)]);
        history
    }

    #[test]
    fn test_daily_deltas() {
        let points = build_chart_data(&history(), MetricType::Cases);
        let values: Vec<_> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![30, 0, 75]);
        assert_eq!(points[0].date, day(2));
    }

    #[test]
    fn test_metric_selects_series() {
        let points = build_chart_data(&history(), MetricType::Deaths);
        assert_eq!(points, vec![ChartPoint { date: day(2), value: 2 }]);
    }

    #[test]
    fn test_short_series() {
        assert!(build_chart_data(&HistorySeries::default(), MetricType::Cases).is_empty());
        assert!(build_chart_data(&history(), MetricType::Recovered).is_empty());
    }
}
