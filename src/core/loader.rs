//! Reading Airtable exports and narrowing them to the analysis window.

use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::models::record::{Record, RecordFile};
use crate::models::source::Source;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadOptions {
    pub now: DateTime<Utc>,
    /// Trailing window in days; 0 keeps every record
    pub window_days: i64,
    pub max_records: usize,
}

impl LoadOptions {
    pub fn from_context(ctx: &AppContext) -> Self {
        Self {
            now: ctx.now,
            window_days: ctx.cfg.window_days,
            max_records: ctx.cfg.max_records,
        }
    }
}

pub struct RecordLoader {
    options: LoadOptions,
}

impl RecordLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    /// Read `path` and keep the records of `source` that fall in the window.
    pub fn load(&self, source: Source, path: &Path) -> AppResult<Vec<Record>> {
        let records = read_records(path)?;
        let read = records.len();
        let selected = self.select(source, records);

        tracing::debug!(
            source = source.as_str(),
            path = %path.display(),
            read,
            selected = selected.len(),
            "records loaded"
        );

        Ok(selected)
    }

    /// Newest first by the source date field, capped at `max_records`, then
    /// restricted to the trailing window. Records whose date cannot be parsed
    /// sort last and never pass a window.
    pub fn select(&self, source: Source, mut records: Vec<Record>) -> Vec<Record> {
        let field = source.date_field();

        records.sort_by_cached_key(|r| Reverse(r.timestamp(field)));
        records.truncate(self.options.max_records);

        if self.options.window_days == 0 {
            return records;
        }

        let cutoff = self.options.now - Duration::days(self.options.window_days);
        records
            .into_iter()
            .filter(|r| r.timestamp(field).is_some_and(|ts| ts >= cutoff))
            .collect()
    }

    /// Load several independent sources at once, one thread each.
    /// Results keep the order of `inputs`; the first failure is returned.
    pub fn load_many(&self, inputs: &[(Source, PathBuf)]) -> AppResult<Vec<(Source, Vec<Record>)>> {
        thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|(source, path)| {
                    let source = *source;
                    scope.spawn(move || self.load(source, path).map(|records| (source, records)))
                })
                .collect();

            handles
                .into_iter()
                .map(|h| {
                    h.join()
                        .map_err(|_| AppError::Other("loader thread panicked".into()))?
                })
                .collect()
        })
    }
}

/// Parse an export file: either a bare array of records or `{"records": [...]}`.
pub fn read_records(path: &Path) -> AppResult<Vec<Record>> {
    let content = fs::read_to_string(path)?;
    let file: RecordFile = serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.display().to_string(),
        source,
    })?;

    Ok(file.into_records())
}
