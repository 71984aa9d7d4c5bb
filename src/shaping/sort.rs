//! Table ordering.

use std::cmp::Reverse;

use crate::models::RegionSummary;

/// One row of the "live cases by country" table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedTableRow {
    pub name: String,
    pub iso_code: String,
    pub cases: u64,
}

impl From<&RegionSummary> for SortedTableRow {
    fn from(summary: &RegionSummary) -> Self {
        Self {
            name: summary.name.clone(),
            iso_code: summary.iso_code.clone(),
            cases: summary.cases.unwrap_or(0),
        }
    }
}

/// Order records by `cases`, highest first.
///
/// `sort_by_key` is stable, so records with equal case counts keep their
/// input order. A missing count sorts as zero.
pub fn sort_data(records: &[RegionSummary]) -> Vec<SortedTableRow> {
    let mut rows: Vec<SortedTableRow> = records.iter().map(SortedTableRow::from).collect();
    rows.sort_by_key(|row| Reverse(row.cases));
    rows
}
