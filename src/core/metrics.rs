//! Headline metric cards per source and the cross-source overview.

use crate::core::calculator::business_hours::BusinessCalendar;
use crate::core::calculator::distribution::{SENT_TO_PRODUCTION, percentage};
use crate::core::calculator::processing::median_processing_minutes;
use crate::core::calculator::stats::minutes_to_hours;
use crate::models::fields;
use crate::models::metric::MetricCard;
use crate::models::priority::Priority;
use crate::models::record::Record;
use crate::models::source::Source;
use crate::utils::time::format_hours;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeSet;

const UPCOMING_DAYS: i64 = 7;
const RECENT_LOGOS: usize = 5;

pub fn performance_metrics(
    source: Source,
    records: &[Record],
    calendar: &BusinessCalendar,
    now: DateTime<Utc>,
) -> Vec<MetricCard> {
    match source {
        Source::Mockups => mockup_metrics(records),
        Source::Logos => logo_metrics(records, calendar),
        Source::Stores => store_metrics(records, now),
    }
}

pub fn mockup_metrics(records: &[Record]) -> Vec<MetricCard> {
    let completed = records
        .iter()
        .filter(|r| r.text(fields::STATUS).as_deref() == Some(SENT_TO_PRODUCTION))
        .count();

    let designers: BTreeSet<Option<String>> = records
        .iter()
        .map(|r| r.text(fields::DESIGNER_EMAIL))
        .collect();

    vec![
        MetricCard::new("Total Mockups", records.len(), "in window"),
        MetricCard::new(
            "Completion Rate",
            format!("{}%", whole_percent(completed, records.len())),
            "sent to production",
        ),
        MetricCard::new("Active Designers", designers.len(), "unique designers"),
    ]
}

pub fn logo_metrics(records: &[Record], calendar: &BusinessCalendar) -> Vec<MetricCard> {
    let total = records.len();
    let rush = count_priority(records, Priority::Rush);
    let lax_ink = count_lax_ink_variations(records);
    let median = median_processing_minutes(records, calendar);

    vec![
        MetricCard::new("Total Logos", total, "in window"),
        MetricCard::new(
            "Rush Orders",
            format!("{rush} ({}%)", whole_percent(rush, total)),
            "high priority",
        ),
        MetricCard::new(
            "Lax.Ink Variations",
            format!("{lax_ink} ({}%)", whole_percent(lax_ink, total)),
            "variation orders",
        ),
        MetricCard::new(
            "Avg. Processing Time",
            format_hours(minutes_to_hours(median)),
            "business hours only",
        ),
    ]
}

pub fn store_metrics(records: &[Record], now: DateTime<Utc>) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Total Store Orders", records.len(), "in window"),
        MetricCard::new(
            "Upcoming Deadlines",
            upcoming_deadlines(records, now),
            "within 7 days",
        ),
        MetricCard::new("Overdue Orders", overdue_orders(records, now), "past deadline"),
    ]
}

/// Orders whose deadline is after `now` and less than seven days away.
pub fn upcoming_deadlines(records: &[Record], now: DateTime<Utc>) -> usize {
    let horizon = now + Duration::days(UPCOMING_DAYS);
    records
        .iter()
        .filter_map(|r| r.timestamp(fields::ORDER_DEADLINE))
        .filter(|d| *d > now && *d < horizon)
        .count()
}

pub fn overdue_orders(records: &[Record], now: DateTime<Utc>) -> usize {
    records
        .iter()
        .filter_map(|r| r.timestamp(fields::ORDER_DEADLINE))
        .filter(|d| *d < now)
        .count()
}

pub fn count_priority(records: &[Record], priority: Priority) -> usize {
    records.iter().filter(|r| Priority::of(r) == priority).count()
}

/// Every Lax.Ink variation, rush ones included.
pub fn count_lax_ink_variations(records: &[Record]) -> usize {
    records
        .iter()
        .filter(|r| Priority::is_lax_ink_variation(r))
        .count()
}

fn whole_percent(part: usize, total: usize) -> i64 {
    percentage(part, total).round() as i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentLogo {
    pub account_name: Option<String>,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

/// Dashboard landing numbers across all three sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_mockups: usize,
    pub total_logos: usize,
    pub total_stores: usize,
    pub rush_logos: usize,
    pub lax_ink_logos: usize,
    pub new_logos: usize,
    pub completed_mockups: usize,
    pub upcoming_deadlines: usize,
    pub recent_logos: Vec<RecentLogo>,
}

pub fn overview(
    mockups: &[Record],
    logos: &[Record],
    stores: &[Record],
    now: DateTime<Utc>,
) -> Overview {
    let rush = count_priority(logos, Priority::Rush);
    let lax_ink = count_lax_ink_variations(logos);

    let mut recent: Vec<&Record> = logos.iter().collect();
    recent.sort_by_cached_key(|r| Reverse(r.timestamp(fields::LOGO_CREATED)));

    Overview {
        total_mockups: mockups.len(),
        total_logos: logos.len(),
        total_stores: stores.len(),
        rush_logos: rush,
        lax_ink_logos: lax_ink,
        new_logos: count_priority(logos, Priority::New),
        completed_mockups: mockups
            .iter()
            .filter(|r| r.text(fields::STATUS).as_deref() == Some(SENT_TO_PRODUCTION))
            .count(),
        upcoming_deadlines: upcoming_deadlines(stores, now),
        recent_logos: recent
            .into_iter()
            .take(RECENT_LOGOS)
            .map(|r| RecentLogo {
                account_name: r.text(fields::ACCOUNT_NAME),
                description: r.text(fields::DESCRIPTION),
                created: r.timestamp(fields::LOGO_CREATED),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn logo(fields: serde_json::Value) -> Record {
        serde_json::from_value(json!({"id": "rec", "fields": fields})).unwrap()
    }

    fn card<'a>(cards: &'a [MetricCard], title: &str) -> &'a str {
        &cards.iter().find(|c| c.title == title).unwrap().value
    }

    #[test]
    fn rush_variation_counts_as_rush_and_lax_ink() {
        let logos = vec![
            logo(json!({"Rush Order": true, "VariationOfCheck": "Lax.Ink"})),
            logo(json!({"Rush Order": true})),
            logo(json!({"VariationOfCheck": "Lax.Ink"})),
            logo(json!({})),
        ];

        let cards = logo_metrics(&logos, &BusinessCalendar::default());
        assert_eq!(card(&cards, "Rush Orders"), "2 (50%)");
        assert_eq!(card(&cards, "Lax.Ink Variations"), "2 (50%)");

        let now = Utc.with_ymd_and_hms(2025, 9, 26, 12, 0, 0).unwrap();
        let ov = overview(&[], &logos, &[], now);
        assert_eq!((ov.rush_logos, ov.lax_ink_logos, ov.new_logos), (2, 2, 1));
    }

    #[test]
    fn single_rush_variation() {
        let logos = vec![logo(json!({"Rush Order": true, "VariationOfCheck": "Lax.Ink"}))];
        let cards = logo_metrics(&logos, &BusinessCalendar::default());

        assert_eq!(card(&cards, "Lax.Ink Variations"), "1 (100%)");
    }
}
