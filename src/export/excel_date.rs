// src/export/excel_date.rs

use chrono::NaiveDate;

/// Interpret a `YYYY-MM-DD` cell as an Excel date serial with its number format.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(("yyyy-mm-dd", (d - epoch).num_days() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_become_serials() {
        assert_eq!(parse_to_excel_date("1900-03-01"), Some(("yyyy-mm-dd", 61.0)));
        assert_eq!(parse_to_excel_date("2025-09-16"), Some(("yyyy-mm-dd", 45916.0)));
        assert_eq!(parse_to_excel_date("1.5h"), None);
    }
}
