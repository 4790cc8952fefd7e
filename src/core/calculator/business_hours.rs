//! Elapsed time restricted to business hours.
//!
//! Business time is Monday–Friday between `start_hour` and `end_hour` in a
//! reference time zone (America/New_York, 09–17 by default).
//!
//! The calculator walks the interval one local hour at a time, so its cost is
//! O(hours) in the length of the interval. Inputs are processing times of a
//! few days or weeks, which keeps the walk short.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessCalendar {
    tz: Tz,
    start_hour: u32,
    end_hour: u32,
}

impl Default for BusinessCalendar {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::New_York,
            start_hour: 9,
            end_hour: 17,
        }
    }
}

impl BusinessCalendar {
    pub fn new(tz: Tz, start_hour: u32, end_hour: u32) -> AppResult<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(AppError::Config(format!(
                "invalid business hours {start_hour:02}-{end_hour:02}"
            )));
        }

        Ok(Self {
            tz,
            start_hour,
            end_hour,
        })
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    pub fn hours(&self) -> (u32, u32) {
        (self.start_hour, self.end_hour)
    }

    /// True when `instant` falls on a weekday inside the business window,
    /// evaluated in the reference zone.
    pub fn is_business_hour(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&self.tz);
        let weekday = !matches!(local.weekday(), Weekday::Sat | Weekday::Sun);
        let hour = local.hour();

        weekday && hour >= self.start_hour && hour < self.end_hour
    }

    /// Business minutes in `[start, end)`. Zero when `end <= start`.
    ///
    /// Each step covers one local clock hour. A step counts when its first
    /// instant is business time, and contributes only its overlap with
    /// `[start, end)`, so partial first and last hours are clipped.
    ///
    /// Steps are taken in absolute time. Zones with whole-hour offsets keep
    /// their hour boundaries aligned across DST changes, and US transitions
    /// happen at 02:00 local, so the result is unaffected by DST there.
    pub fn minutes_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        if end <= start {
            return 0.0;
        }

        let step = Duration::hours(1);
        let mut current = self.floor_to_local_hour(start);
        let mut millis: i64 = 0;

        while current < end {
            let next = current + step;

            if self.is_business_hour(current) {
                let seg_start = current.max(start);
                let seg_end = next.min(end);

                if seg_end > seg_start {
                    millis += (seg_end - seg_start).num_milliseconds();
                }
            }

            current = next;
        }

        millis as f64 / 60_000.0
    }

    /// Start of the local clock hour containing `instant`.
    fn floor_to_local_hour(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let local = instant.with_timezone(&self.tz);
        let into_hour = Duration::minutes(i64::from(local.minute()))
            + Duration::seconds(i64::from(local.second()))
            + Duration::nanoseconds(i64::from(local.nanosecond()));

        instant - into_hour
    }
}

/// Business minutes between two instants using the default calendar
/// (Mon–Fri, 09:00–17:00 America/New_York).
pub fn business_minutes_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    BusinessCalendar::default().minutes_between(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ny(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        chrono_tz::America::New_York
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc)
    }

    #[test]
    fn one_hour_on_a_tuesday() {
        // 2025-09-16 is a Tuesday
        let start = ny(2025, 9, 16, 10, 0);
        let end = ny(2025, 9, 16, 11, 0);
        assert_eq!(business_minutes_between(start, end), 60.0);
    }

    #[test]
    fn friday_afternoon_to_monday_morning() {
        let start = ny(2025, 9, 19, 16, 30);
        assert_eq!(business_minutes_between(start, ny(2025, 9, 22, 9, 0)), 30.0);
        assert_eq!(business_minutes_between(start, ny(2025, 9, 22, 9, 30)), 60.0);
    }

    #[test]
    fn reversed_or_empty_interval_is_zero() {
        let t = ny(2025, 9, 16, 10, 0);
        assert_eq!(business_minutes_between(t, t), 0.0);
        assert_eq!(business_minutes_between(t, ny(2025, 9, 16, 9, 0)), 0.0);
    }

    #[test]
    fn weekend_and_night_contribute_nothing() {
        // Saturday 2025-09-20 all day
        let start = ny(2025, 9, 20, 0, 0);
        let end = ny(2025, 9, 21, 23, 0);
        assert_eq!(business_minutes_between(start, end), 0.0);

        // Tuesday 17:00 → Wednesday 09:00
        let start = ny(2025, 9, 16, 17, 0);
        let end = ny(2025, 9, 17, 9, 0);
        assert_eq!(business_minutes_between(start, end), 0.0);
    }

    #[test]
    fn partial_hours_are_clipped() {
        let start = ny(2025, 9, 16, 10, 15);
        let end = ny(2025, 9, 16, 10, 45);
        assert_eq!(business_minutes_between(start, end), 30.0);

        // 08:50 → 09:10 only counts the 10 minutes after opening
        let start = ny(2025, 9, 16, 8, 50);
        let end = ny(2025, 9, 16, 9, 10);
        assert_eq!(business_minutes_between(start, end), 10.0);
    }

    #[test]
    fn full_week_is_forty_hours() {
        // Monday 2025-09-15 00:00 → Monday 2025-09-22 00:00
        let start = ny(2025, 9, 15, 0, 0);
        let end = ny(2025, 9, 22, 0, 0);
        assert_eq!(business_minutes_between(start, end), 40.0 * 60.0);
    }

    #[test]
    fn dst_change_does_not_shift_the_window() {
        // US DST ends Sunday 2025-11-02; Friday 16:00 EDT → Monday 10:00 EST
        let start = ny(2025, 10, 31, 16, 0);
        let end = ny(2025, 11, 3, 10, 0);
        assert_eq!(business_minutes_between(start, end), 120.0);
    }

    #[test]
    fn custom_window_and_zone() {
        let cal = BusinessCalendar::new(chrono_tz::Europe::Rome, 8, 12).unwrap();
        let start = chrono_tz::Europe::Rome
            .with_ymd_and_hms(2025, 9, 16, 7, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let end = start + Duration::hours(8);
        assert_eq!(cal.minutes_between(start, end), 240.0);
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(BusinessCalendar::new(chrono_tz::UTC, 17, 9).is_err());
        assert!(BusinessCalendar::new(chrono_tz::UTC, 9, 25).is_err());
    }
}
