/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for the "N/A" placeholder, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Heatmap intensity: grey for empty cells, then green → yellow → red.
pub fn color_for_intensity(count: usize, max: usize) -> &'static str {
    if count == 0 || max == 0 {
        return GREY;
    }
    let ratio = count as f64 / max as f64;
    if ratio > 0.66 {
        RED
    } else if ratio > 0.33 {
        YELLOW
    } else {
        GREEN
    }
}

/// Outlier count: yellow when anything was trimmed.
pub fn color_for_outliers(outliers: usize) -> &'static str {
    if outliers > 0 { YELLOW } else { RESET }
}
