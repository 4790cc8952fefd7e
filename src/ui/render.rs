//! Text rendering of the derived reports.

use crate::core::calculator::distribution::{StatusShare, StatusSummary, TypeCount};
use crate::core::calculator::heatmap::{DAYS, Heatmap};
use crate::core::calculator::reps::RepStats;
use crate::core::calculator::timeline::DailyPoint;
use crate::core::metrics::Overview;
use crate::models::category_stats::CategoryStatistics;
use crate::models::metric::MetricCard;
use crate::utils::bar;
use crate::utils::colors::{RESET, color_for_intensity, color_for_outliers, colorize_optional};
use crate::utils::formatting::{bold, pad_left, pad_right, percent};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, format_local_date};
use chrono_tz::Tz;

pub fn cards(cards: &[MetricCard]) -> String {
    let width = cards
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0);

    cards
        .iter()
        .map(|c| {
            format!(
                "{}  {}  {}\n",
                pad_right(&c.title, width),
                bold(&pad_left(&c.value, 10)),
                c.description
            )
        })
        .collect()
}

pub fn category_stats(stats: &[CategoryStatistics], label: &str) -> String {
    let mut t = Table::new(vec![
        Column::new(label),
        Column::new("Orders").right(),
        Column::new("Avg").right(),
        Column::new("Median").right(),
        Column::new("Range").right(),
        Column::new("Samples").right(),
        Column::new("Outliers").right(),
    ]);

    for s in stats {
        t.add_row(vec![
            s.category.clone(),
            s.count.to_string(),
            format_hours(s.average),
            format_hours(s.median),
            format!("{} - {}", format_hours(s.min), format_hours(s.max)),
            format!("{}/{}", s.cleaned_samples, s.total_samples),
            format!("{}{}{}", color_for_outliers(s.outliers), s.outliers, RESET),
        ]);
    }

    t.render()
}

pub fn reps(reps: &[RepStats]) -> String {
    let mut t = Table::new(vec![
        Column::new("Rep"),
        Column::new("Total").right(),
        Column::new("Rush").right(),
        Column::new("Lax.Ink").right(),
        Column::new("New").right(),
        Column::new("Rush %").right(),
        Column::new("Lax.Ink %").right(),
        Column::new("Median").right(),
    ]);

    for r in reps {
        t.add_row(vec![
            r.rep.clone(),
            r.total.to_string(),
            r.rush.to_string(),
            r.lax_ink.to_string(),
            r.new.to_string(),
            percent(r.rush_percentage),
            percent(r.lax_ink_percentage),
            format_hours(r.median_time),
        ]);
    }

    t.render()
}

pub fn series(points: &[DailyPoint]) -> String {
    let peak = points.iter().map(|p| p.value).max().unwrap_or(0);
    let mut t = Table::new(vec![
        Column::new("Date"),
        Column::new("Count").right(),
        Column::new("Cumulative").right(),
        Column::new(""),
    ]);

    for p in points {
        t.add_row(vec![
            p.date.format("%Y-%m-%d").to_string(),
            p.value.to_string(),
            p.cumulative.to_string(),
            bar(p.value, peak, 30),
        ]);
    }

    t.render()
}

pub fn heatmap(map: &Heatmap) -> String {
    let max = map.max();
    let mut out = String::from("     ");

    for h in 0..24 {
        out.push_str(&format!("{h:>3}"));
    }
    out.push('\n');

    for (d, day) in DAYS.iter().enumerate() {
        out.push_str(&format!("{day:<5}"));
        for count in map.row(d) {
            let color = color_for_intensity(*count, max);
            out.push_str(&format!("{color}{count:>3}{RESET}"));
        }
        out.push('\n');
    }

    out
}

pub fn status(shares: &[StatusShare], summary: &StatusSummary, total: usize) -> String {
    let mut t = Table::new(vec![
        Column::new("Stage"),
        Column::new("Count").right(),
        Column::new("Share").right(),
        Column::new(""),
    ]);

    for s in shares {
        t.add_row(vec![
            s.stage.clone(),
            s.count.to_string(),
            percent(s.percentage),
            bar(s.count, total, 30),
        ]);
    }

    format!(
        "{}\nCompleted: {}  In progress: {}  Need attention: {}\n",
        t.render(),
        summary.completed,
        summary.in_progress,
        summary.needs_attention
    )
}

pub fn product_types(types: &[TypeCount], total: usize) -> String {
    let mut t = Table::new(vec![
        Column::new("Product Type").max_width(50),
        Column::new("Count").right(),
        Column::new(""),
    ]);

    for ty in types {
        t.add_row(vec![
            ty.name.clone(),
            ty.count.to_string(),
            bar(ty.count, total, 30),
        ]);
    }

    t.render()
}

pub fn overview(ov: &Overview, tz: Tz) -> String {
    let mut out = String::new();

    out.push_str(&cards(&[
        MetricCard::new("Total Mockups", ov.total_mockups, "mockups in window"),
        MetricCard::new(
            "Total Logos",
            ov.total_logos,
            &format!(
                "{} Rush • {} Lax.Ink • {} New",
                ov.rush_logos, ov.lax_ink_logos, ov.new_logos
            ),
        ),
        MetricCard::new("Store Orders", ov.total_stores, "orders in window"),
        MetricCard::new("Rush Orders", ov.rush_logos, "high priority items"),
        MetricCard::new("Completed Mockups", ov.completed_mockups, "sent to production"),
        MetricCard::new("Upcoming Deadlines", ov.upcoming_deadlines, "within 7 days"),
    ]));

    if !ov.recent_logos.is_empty() {
        let mut t = Table::new(vec![
            Column::new("Account Name").max_width(30),
            Column::new("Description").max_width(40),
            Column::new("Created"),
        ]);
        for logo in &ov.recent_logos {
            t.add_row(vec![
                colorize_optional(logo.account_name.as_deref().unwrap_or("N/A")),
                colorize_optional(logo.description.as_deref().unwrap_or("N/A")),
                logo.created
                    .map(|ts| format_local_date(ts, tz))
                    .unwrap_or_else(|| colorize_optional("N/A")),
            ]);
        }
        out.push_str("\nRecent logos\n");
        out.push_str(&t.render());
    }

    out
}
