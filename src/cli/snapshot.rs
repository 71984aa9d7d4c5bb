//! `--snapshot`: fetch once and print a plain-text report to stdout.
//!
//! ```text
//! COVID-19 snapshot: Worldwide
//! ════════════════════════════════════════════════════════════
//! Coronavirus Cases          +5          100 total
//! ...
//! ```

use std::io::{self, Write};

use color_eyre::Result;
use tracing::{info, warn};

use crate::api::StatsClient;
use crate::error::TrackerResult;
use crate::models::{MetricType, RegionSummary};
use crate::shaping::{format_total, group_thousands, pretty_print_stat, sort_data};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Countries listed after the counters.
pub const TOP_COUNTRIES: usize = 10;

/// Fetch the worldwide summary and the country list concurrently and print
/// the report.
///
/// A failed summary fetch is an error; a failed country fetch only drops the
/// country section.
pub async fn run_snapshot(client: &StatsClient) -> Result<()> {
    info!("Snapshot from {}", client.base_url());
    let (summary, countries) = tokio::join!(client.fetch_global(), client.fetch_all_countries());
    let summary = summary?;

    let mut out = io::stdout().lock();
    write_snapshot(&mut out, &summary, countries, TOP_COUNTRIES)?;
    out.flush()?;
    Ok(())
}

/// Write the report for already-fetched data.
pub fn write_snapshot<W: Write>(
    out: &mut W,
    summary: &RegionSummary,
    countries: TrackerResult<Vec<RegionSummary>>,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "COVID-19 snapshot: {}", summary.name)?;
    writeln!(out, "{}", "═".repeat(LINE_WIDTH))?;
    for metric in MetricType::ALL {
        writeln!(
            out,
            "{:<20} {:>12} {:>18} total",
            metric.title(),
            pretty_print_stat(summary.today(metric)),
            format_total(summary.total(metric)),
        )?;
    }
    writeln!(out)?;

    match countries {
        Ok(countries) => {
            writeln!(out, "Top {} countries by cases", top.min(countries.len()))?;
            writeln!(out, "{}", "─".repeat(LINE_WIDTH))?;
            for (rank, row) in sort_data(&countries).iter().take(top).enumerate() {
                writeln!(out, "{:>3}. {:<32} {:>18}", rank + 1, row.name, group_thousands(row.cases))?;
            }
        }
        Err(e) => {
            warn!("Country list unavailable: {}", e);
            writeln!(out, "Country list unavailable: {}", e.user_message())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, TrackerError};

    fn summary() -> RegionSummary {
        RegionSummary {
            name: "Worldwide".to_string(),
            iso_code: "worldwide".to_string(),
            cases: Some(1_234_567),
            today_cases: Some(5),
            deaths: Some(10),
            today_deaths: None,
            recovered: Some(50),
            today_recovered: Some(2),
            ..Default::default()
        }
    }

    fn country(name: &str, cases: u64) -> RegionSummary {
        RegionSummary {
            name: name.to_string(),
            iso_code: name[..2].to_uppercase(),
            cases: Some(cases),
            ..Default::default()
        }
    }

    fn render(countries: TrackerResult<Vec<RegionSummary>>, top: usize) -> String {
        let mut buf = Vec::new();
        write_snapshot(&mut buf, &summary(), countries, top).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counters_and_ranking() {
        let text = render(
            Ok(vec![country("Malta", 5), country("France", 300), country("Italy", 700)]),
            2,
        );
        assert!(text.starts_with("COVID-19 snapshot: Worldwide\n"));
        assert!(text.contains("1,234,567 total"));
        // Missing today's deaths shows the placeholder
        let deaths = text.lines().find(|l| l.starts_with("Deaths")).unwrap();
        assert!(deaths.contains("+0"));

        assert!(text.contains("Top 2 countries by cases"));
        let italy = text.find("Italy").unwrap();
        let france = text.find("France").unwrap();
        assert!(italy < france);
        assert!(!text.contains("Malta"));
    }

    #[test]
    fn test_country_failure_is_reported_inline() {
        let error: TrackerError = FetchError::Timeout {
            url: "http://stats.test/v3/covid-19/countries".to_string(),
        }
        .into();
        let text = render(Err(error), TOP_COUNTRIES);
        assert!(text.contains("Coronavirus Cases"));
        assert!(text.contains("Country list unavailable"));
    }
}
