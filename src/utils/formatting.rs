//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{CYAN, RESET};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Horizontal rule built from the configured separator character.
pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}

/// Proportional bar for distributions: `value` out of `total` on `width` cells.
pub fn bar(value: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let filled = ((value as f64 / total as f64) * width as f64).round() as usize;
    format!("{CYAN}{}{RESET}", "█".repeat(filled.min(width)))
}

/// `12.5` → `12.5%`
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_uses_first_char() {
        assert_eq!(separator("=*", 4), "====");
        assert_eq!(separator("", 3), "---");
    }

    #[test]
    fn bar_is_proportional() {
        assert!(bar(5, 10, 10).contains(&"█".repeat(5)));
        assert_eq!(bar(1, 0, 10), "");
    }
}
