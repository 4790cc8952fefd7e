//! Count-based breakdowns: mockup status stages and product types.

use crate::core::calculator::stats::round1;
use crate::models::fields;
use crate::models::record::Record;
use serde::Serialize;
use std::collections::BTreeMap;

pub const TO_DO: &str = "To Do";
pub const UPDATED_ARTWORK: &str = "Updated Artwork";
pub const APPROVED: &str = "Approved- Needs Final Art";
pub const SENT_TO_PRODUCTION: &str = "Sent to Production";
pub const STANDBY: &str = "Standby";
pub const NEEDS_REP_ATTENTION: &str = "Needs Rep Attention";

/// Pipeline stages in workflow order.
pub const STATUS_ORDER: [&str; 6] = [
    TO_DO,
    UPDATED_ARTWORK,
    APPROVED,
    SENT_TO_PRODUCTION,
    STANDBY,
    NEEDS_REP_ATTENTION,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub stage: String,
    pub count: usize,
    /// Share of all mockups, one decimal
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub needs_attention: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub name: String,
    pub count: usize,
}

/// Count records per key.
pub fn count_by<F>(records: &[Record], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&Record) -> String,
{
    let mut counts = BTreeMap::new();
    for r in records {
        *counts.entry(key(r)).or_default() += 1;
    }
    counts
}

/// Percentage of `part` in `total`; 0 for an empty total.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Mockups per pipeline stage, always all six stages in workflow order.
/// A mockup without status is still in "To Do"; statuses outside the
/// pipeline are not shown but still count towards the total.
pub fn status_distribution(records: &[Record]) -> Vec<StatusShare> {
    let counts = count_by(records, |r| {
        r.text(fields::STATUS).unwrap_or_else(|| TO_DO.to_string())
    });

    STATUS_ORDER
        .iter()
        .map(|stage| {
            let count = counts.get(*stage).copied().unwrap_or(0);
            StatusShare {
                stage: stage.to_string(),
                count,
                percentage: round1(percentage(count, records.len())),
            }
        })
        .collect()
}

pub fn status_summary(shares: &[StatusShare]) -> StatusSummary {
    let count_of = |stage: &str| {
        shares
            .iter()
            .find(|s| s.stage == stage)
            .map_or(0, |s| s.count)
    };

    StatusSummary {
        completed: count_of(SENT_TO_PRODUCTION),
        in_progress: count_of(UPDATED_ARTWORK) + count_of(APPROVED),
        needs_attention: count_of(NEEDS_REP_ATTENTION),
    }
}

/// Mockups per product type, most frequent first.
pub fn product_types(records: &[Record]) -> Vec<TypeCount> {
    let counts = count_by(records, |r| {
        r.text(fields::PRODUCT_TYPES)
            .unwrap_or_else(|| "Unknown".to_string())
    });

    let mut out: Vec<TypeCount> = counts
        .into_iter()
        .map(|(name, count)| TypeCount { name, count })
        .collect();

    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}
