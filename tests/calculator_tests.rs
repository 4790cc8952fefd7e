use chrono::{DateTime, TimeZone, Utc};
use rstudiometrics::core::calculator::aggregate::{aggregate, aggregate_by_category};
use rstudiometrics::core::calculator::business_hours::BusinessCalendar;
use rstudiometrics::models::time_record::TimeRecord;

fn ny(d: u32, h: u32, min: u32) -> DateTime<Utc> {
    chrono_tz::America::New_York
        .with_ymd_and_hms(2025, 9, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .with_timezone(&Utc)
}

/// Record created Tuesday 2025-09-16 09:00 and finished `minutes` later.
fn finished_after(minutes: i64, category: &str) -> TimeRecord {
    let start = ny(16, 9, 0);
    TimeRecord::new(
        Some(start),
        Some(start + chrono::Duration::minutes(minutes)),
        category,
    )
}

#[test]
fn empty_input_gives_no_groups() {
    assert!(aggregate(&[], &BusinessCalendar::default()).is_empty());
}

#[test]
fn groups_sorted_by_average_then_name() {
    let cal = BusinessCalendar::default();
    let records = vec![
        finished_after(240, "Rush"),
        finished_after(60, "New"),
        finished_after(60, "Lax.Ink"),
        finished_after(120, "Rush"),
    ];

    let stats = aggregate(&records, &cal);
    let order: Vec<&str> = stats.iter().map(|s| s.category.as_str()).collect();

    assert_eq!(order, ["Lax.Ink", "New", "Rush"]);
    assert_eq!(stats[2].count, 2);
    assert_eq!(stats[2].average, 3.0);
    assert_eq!(stats[2].median, 3.0);
    assert_eq!((stats[2].min, stats[2].max), (2.0, 4.0));
}

#[test]
fn outliers_are_removed_per_group() {
    let cal = BusinessCalendar::default();
    // 60, 60, 60, 60 and a 480 minute job: IQR is 0, so 480 is dropped
    let mut records: Vec<TimeRecord> = (0..4).map(|_| finished_after(60, "New")).collect();
    records.push(finished_after(480, "New"));

    let stats = aggregate(&records, &cal);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_samples, 5);
    assert_eq!(stats[0].cleaned_samples, 4);
    assert_eq!(stats[0].outliers, 1);
    assert_eq!(stats[0].max, 1.0);
}

#[test]
fn records_without_sample_still_count() {
    let cal = BusinessCalendar::default();
    let created = ny(16, 10, 0);
    let records = vec![
        TimeRecord::new(Some(created), None, "New"),
        TimeRecord::new(None, Some(created), "New"),
        // modified before creation
        TimeRecord::new(Some(created), Some(ny(16, 9, 0)), "New"),
        // only outside business hours
        TimeRecord::new(Some(ny(16, 18, 0)), Some(ny(16, 20, 0)), "New"),
    ];

    let stats = aggregate(&records, &cal);

    assert_eq!(stats[0].count, 4);
    assert_eq!(stats[0].total_samples, 0);
    assert_eq!(
        (stats[0].median, stats[0].average, stats[0].min, stats[0].max),
        (0.0, 0.0, 0.0, 0.0)
    );
}

#[test]
fn aggregation_is_repeatable() {
    let cal = BusinessCalendar::default();
    let records = vec![
        finished_after(90, "Rush"),
        finished_after(30, "New"),
        finished_after(45, "Rush"),
    ];

    assert_eq!(aggregate(&records, &cal), aggregate(&records, &cal));
}

#[test]
fn custom_categorizer() {
    let cal = BusinessCalendar::default();
    let records = vec![
        finished_after(60, "Rush"),
        finished_after(120, "Lax.Ink"),
        finished_after(180, "New"),
    ];

    let stats = aggregate_by_category(&records, &cal, |r| {
        if r.category == "Rush" { "Rush" } else { "Standard" }.to_string()
    });

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[1].category, "Standard");
    assert_eq!(stats[1].count, 2);
    assert_eq!(stats[1].average, 2.5);
}
