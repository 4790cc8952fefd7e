use crate::models::record::Record;
use chrono::{DateTime, Utc};

/// The two timestamps of a record plus the category it is grouped under.
/// Missing or unparseable timestamps stay `None` and yield no sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub created_at: Option<DateTime<Utc>>,
    pub last_modified_at: Option<DateTime<Utc>>,
    pub category: String,
}

impl TimeRecord {
    pub fn new(
        created_at: Option<DateTime<Utc>>,
        last_modified_at: Option<DateTime<Utc>>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            created_at,
            last_modified_at,
            category: category.into(),
        }
    }

    pub fn from_record(
        record: &Record,
        created_field: &str,
        modified_field: &str,
        category: impl Into<String>,
    ) -> Self {
        Self::new(
            record.timestamp(created_field),
            record.timestamp(modified_field),
            category,
        )
    }
}
