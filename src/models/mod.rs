pub mod category_stats;
pub mod fields;
pub mod metric;
pub mod priority;
pub mod record;
pub mod source;
pub mod time_record;
