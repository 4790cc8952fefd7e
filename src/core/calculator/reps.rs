//! Logo volume and turnaround per sales rep.

use crate::core::calculator::business_hours::BusinessCalendar;
use crate::core::calculator::distribution::percentage;
use crate::core::calculator::processing::processing_minutes;
use crate::core::calculator::stats::{median, minutes_to_hours, round1};
use crate::models::fields;
use crate::models::priority::Priority;
use crate::models::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepStats {
    pub rep: String,
    pub total: usize,
    pub rush: usize,
    pub lax_ink: usize,
    pub new: usize,
    pub rush_percentage: f64,
    pub lax_ink_percentage: f64,
    /// Median business-hours processing time, hours
    pub median_time: f64,
}

#[derive(Default)]
struct RepAcc {
    total: usize,
    rush: usize,
    lax_ink: usize,
    new: usize,
    times: Vec<f64>,
}

/// Local part of the rep e-mail, or "Unknown".
pub fn rep_name(email: Option<&str>) -> String {
    match email {
        Some(e) => e.split('@').next().filter(|s| !s.is_empty()).unwrap_or(e).to_string(),
        None => "Unknown".to_string(),
    }
}

/// One row per rep, busiest first (ties by name).
pub fn rep_analytics(records: &[Record], calendar: &BusinessCalendar) -> Vec<RepStats> {
    let mut reps: BTreeMap<String, RepAcc> = BTreeMap::new();

    for record in records {
        let email = record.text(fields::REP_EMAIL);
        let acc = reps.entry(rep_name(email.as_deref())).or_default();

        acc.total += 1;
        match Priority::of(record) {
            Priority::Rush => acc.rush += 1,
            Priority::LaxInk => acc.lax_ink += 1,
            Priority::New => acc.new += 1,
        }

        if let Some(minutes) = processing_minutes(record, calendar) {
            acc.times.push(minutes);
        }
    }

    let mut out: Vec<RepStats> = reps
        .into_iter()
        .map(|(rep, acc)| RepStats {
            rep,
            total: acc.total,
            rush: acc.rush,
            lax_ink: acc.lax_ink,
            new: acc.new,
            rush_percentage: round1(percentage(acc.rush, acc.total)),
            lax_ink_percentage: round1(percentage(acc.lax_ink, acc.total)),
            median_time: minutes_to_hours(median(&acc.times)),
        })
        .collect();

    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.rep.cmp(&b.rep)));
    out
}
