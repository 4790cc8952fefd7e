pub mod calculator;
pub mod config;
pub mod context;
pub mod loader;
pub mod metrics;
pub mod table;
