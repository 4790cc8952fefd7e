pub mod aggregate;
pub mod business_hours;
pub mod distribution;
pub mod heatmap;
pub mod processing;
pub mod reps;
pub mod stats;
pub mod timeline;
