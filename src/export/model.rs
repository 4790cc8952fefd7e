// src/export/model.rs

use crate::core::calculator::reps::RepStats;
use crate::core::calculator::timeline::DailyPoint;
use crate::errors::{AppError, AppResult};
use crate::models::category_stats::CategoryStatistics;
use serde::Serialize;
use serde_json::Value;

/// A row type that can be written as a table.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

impl ExportRow for CategoryStatistics {
    fn headers() -> Vec<&'static str> {
        vec![
            "category",
            "count",
            "total_samples",
            "cleaned_samples",
            "outliers",
            "median_hours",
            "average_hours",
            "min_hours",
            "max_hours",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.count.to_string(),
            self.total_samples.to_string(),
            self.cleaned_samples.to_string(),
            self.outliers.to_string(),
            format!("{:.1}", self.median),
            format!("{:.1}", self.average),
            format!("{:.1}", self.min),
            format!("{:.1}", self.max),
        ]
    }
}

impl ExportRow for RepStats {
    fn headers() -> Vec<&'static str> {
        vec![
            "rep",
            "total",
            "rush",
            "lax_ink",
            "new",
            "rush_percentage",
            "lax_ink_percentage",
            "median_hours",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.rep.clone(),
            self.total.to_string(),
            self.rush.to_string(),
            self.lax_ink.to_string(),
            self.new.to_string(),
            format!("{:.1}", self.rush_percentage),
            format!("{:.1}", self.lax_ink_percentage),
            format!("{:.1}", self.median_time),
        ]
    }
}

impl ExportRow for DailyPoint {
    fn headers() -> Vec<&'static str> {
        vec!["date", "value", "cumulative"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.value.to_string(),
            self.cumulative.to_string(),
        ]
    }
}

/// Format-independent content of an export: a table plus its JSON form.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub json: Value,
}

impl Report {
    pub fn from_rows<T: ExportRow>(title: &str, items: &[T]) -> AppResult<Self> {
        let json = serde_json::to_value(items)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

        Ok(Self {
            title: title.to_string(),
            headers: T::headers().into_iter().map(str::to_string).collect(),
            rows: items.iter().map(T::to_row).collect(),
            json,
        })
    }

    /// Table whose JSON form is an array of objects keyed by header.
    pub fn from_table(title: &str, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let json = Value::Array(
            rows.iter()
                .map(|row| {
                    Value::Object(
                        headers
                            .iter()
                            .cloned()
                            .zip(row.iter().cloned().map(Value::String))
                            .collect(),
                    )
                })
                .collect(),
        );

        Self {
            title: title.to_string(),
            headers,
            rows,
            json,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
