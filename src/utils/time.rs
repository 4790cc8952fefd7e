//! Time utilities: parsing ISO-8601 timestamps, formatting hours and dates.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Parse an Airtable timestamp.
///
/// Accepts RFC 3339 (`2025-09-02T14:03:00.000Z`), a naive date-time taken as
/// UTC (`2025-09-02T14:03:00`, `2025-09-02 14:03`) and a bare date taken as
/// UTC midnight (`2025-09-02`).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse the `--now` override; unlike record fields this one must be valid.
pub fn parse_required_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// `1.5` → `1.5h`
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}h")
}

/// Calendar date of `instant` in `tz`.
pub fn format_local_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}
