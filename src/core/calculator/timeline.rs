//! Daily creation counts with a running total.

use crate::models::record::Record;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub value: usize,
    pub cumulative: usize,
}

/// One point per UTC calendar day that has at least one record, oldest first.
/// Records without a parseable `date_field` are skipped.
pub fn build_daily_series(records: &[Record], date_field: &str) -> Vec<DailyPoint> {
    let mut daily: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for ts in records.iter().filter_map(|r| r.timestamp(date_field)) {
        *daily.entry(ts.date_naive()).or_default() += 1;
    }

    let mut cumulative = 0;
    daily
        .into_iter()
        .map(|(date, value)| {
            cumulative += value;
            DailyPoint {
                date,
                value,
                cumulative,
            }
        })
        .collect()
}
