//! Creation activity by weekday and hour.

use crate::models::record::Record;
use chrono::{Datelike, Timelike};
use chrono_tz::Tz;

pub static DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// 7×24 grid of counts, Monday first, hours in the reference zone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Heatmap {
    counts: [[usize; 24]; 7],
}

impl Heatmap {
    pub fn build(records: &[Record], date_field: &str, tz: Tz) -> Self {
        let mut map = Heatmap::default();

        for ts in records.iter().filter_map(|r| r.timestamp(date_field)) {
            let local = ts.with_timezone(&tz);
            let day = local.weekday().num_days_from_monday() as usize;
            map.counts[day][local.hour() as usize] += 1;
        }

        map
    }

    pub fn count(&self, day: usize, hour: usize) -> usize {
        self.counts[day][hour]
    }

    pub fn row(&self, day: usize) -> &[usize; 24] {
        &self.counts[day]
    }

    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn created(ts: &str) -> Record {
        let mut fields = Map::new();
        fields.insert("Created".into(), Value::String(ts.into()));
        Record::new("rec", fields)
    }

    #[test]
    fn counts_land_in_local_weekday_and_hour() {
        let records = vec![
            // Tuesday 14:03 UTC is 10:03 in New York
            created("2025-09-16T14:03:00.000Z"),
            created("2025-09-16T14:59:00.000Z"),
            // Saturday 02:30 UTC is still Friday 22:30 in New York
            created("2025-09-20T02:30:00.000Z"),
            created("not a date"),
        ];

        let map = Heatmap::build(&records, "Created", chrono_tz::America::New_York);

        assert_eq!(map.count(1, 10), 2);
        assert_eq!(map.count(4, 22), 1);
        assert_eq!(map.count(5, 2), 0);
        assert_eq!(map.total(), 3);
        assert_eq!(map.max(), 2);
    }
}
