//! Per-category processing-time statistics.

use crate::core::calculator::business_hours::BusinessCalendar;
use crate::core::calculator::stats::{mean, median, minutes_to_hours, remove_outliers};
use crate::models::category_stats::CategoryStatistics;
use crate::models::time_record::TimeRecord;
use std::collections::BTreeMap;

/// Business minutes from creation to last modification.
///
/// `None` when a timestamp is missing, when the record was never modified
/// after creation, or when no business time elapsed. Every returned sample
/// is strictly positive.
pub fn duration_sample(record: &TimeRecord, calendar: &BusinessCalendar) -> Option<f64> {
    let created = record.created_at?;
    let modified = record.last_modified_at?;

    if modified <= created {
        return None;
    }

    let minutes = calendar.minutes_between(created, modified);
    (minutes > 0.0).then_some(minutes)
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    samples: Vec<f64>,
}

/// Group `records` by `categorize` and summarize each group's samples.
///
/// Outliers are removed per group before computing median, average, min and
/// max. Groups without samples report zeros. Output is sorted by average,
/// then by category name.
pub fn aggregate_by_category<F>(
    records: &[TimeRecord],
    calendar: &BusinessCalendar,
    categorize: F,
) -> Vec<CategoryStatistics>
where
    F: Fn(&TimeRecord) -> String,
{
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();

    for record in records {
        let acc = groups.entry(categorize(record)).or_default();
        acc.count += 1;

        if let Some(sample) = duration_sample(record, calendar) {
            acc.samples.push(sample);
        }
    }

    let mut out: Vec<CategoryStatistics> = groups
        .into_iter()
        .map(|(category, acc)| summarize(category, acc))
        .collect();

    out.sort_by(|a, b| {
        a.average
            .total_cmp(&b.average)
            .then_with(|| a.category.cmp(&b.category))
    });

    tracing::debug!(groups = out.len(), records = records.len(), "aggregated by category");
    out
}

/// Group by the category already carried by each record.
pub fn aggregate(records: &[TimeRecord], calendar: &BusinessCalendar) -> Vec<CategoryStatistics> {
    aggregate_by_category(records, calendar, |r| r.category.clone())
}

fn summarize(category: String, acc: Accumulator) -> CategoryStatistics {
    let cleaned = remove_outliers(&acc.samples);

    // small groups come back unsorted
    let (min, max) = if cleaned.is_empty() {
        (0.0, 0.0)
    } else {
        cleaned
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(*v), hi.max(*v))
            })
    };

    CategoryStatistics {
        category,
        count: acc.count,
        total_samples: acc.samples.len(),
        cleaned_samples: cleaned.len(),
        outliers: acc.samples.len() - cleaned.len(),
        median: minutes_to_hours(median(&cleaned)),
        average: minutes_to_hours(mean(&cleaned)),
        min: minutes_to_hours(min),
        max: minutes_to_hours(max),
    }
}
