use serde::Serialize;

/// Processing-time statistics of one category, durations in hours (1 decimal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatistics {
    pub category: String,
    /// Records in the category, with or without a usable sample
    pub count: usize,
    pub total_samples: usize,
    pub cleaned_samples: usize,
    pub outliers: usize,
    pub median: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}
