//! Logo processing times: creation to last modification, in business hours.

use crate::core::calculator::aggregate::{aggregate, duration_sample};
use crate::core::calculator::business_hours::BusinessCalendar;
use crate::core::calculator::stats::median;
use crate::models::category_stats::CategoryStatistics;
use crate::models::fields;
use crate::models::priority::Priority;
use crate::models::record::Record;
use crate::models::time_record::TimeRecord;

pub fn logo_time_record(record: &Record) -> TimeRecord {
    TimeRecord::from_record(
        record,
        fields::LOGO_CREATED,
        fields::LOGO_LAST_MODIFIED,
        Priority::of(record).as_str(),
    )
}

/// Business minutes a logo took, if it has a usable sample.
pub fn processing_minutes(record: &Record, calendar: &BusinessCalendar) -> Option<f64> {
    duration_sample(&logo_time_record(record), calendar)
}

/// Every usable sample of `records`, in input order.
pub fn processing_samples(records: &[Record], calendar: &BusinessCalendar) -> Vec<f64> {
    records
        .iter()
        .filter_map(|r| processing_minutes(r, calendar))
        .collect()
}

/// Median business minutes over all logos (no outlier removal).
pub fn median_processing_minutes(records: &[Record], calendar: &BusinessCalendar) -> f64 {
    median(&processing_samples(records, calendar))
}

/// Processing-time statistics per priority, fastest first.
pub fn priority_analysis(records: &[Record], calendar: &BusinessCalendar) -> Vec<CategoryStatistics> {
    let time_records: Vec<TimeRecord> = records.iter().map(logo_time_record).collect();
    aggregate(&time_records, calendar)
}
