//! Searchable, paginated record table.

use crate::core::calculator::business_hours::BusinessCalendar;
use crate::core::calculator::processing::processing_minutes;
use crate::core::calculator::reps::rep_name;
use crate::core::calculator::stats::minutes_to_hours;
use crate::errors::{AppError, AppResult};
use crate::models::priority::Priority;
use crate::models::record::Record;
use crate::models::source::{ColumnKind, Source, TableColumn};
use crate::utils::time::{format_hours, format_local_date};

pub const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based page shown
    pub page: usize,
    pub pages: usize,
    /// Records matching the search
    pub total: usize,
    /// 0-based index of the first row shown
    pub start: usize,
    /// Exclusive end index of the rows shown
    pub end: usize,
}

impl TablePage {
    pub fn footer(&self) -> String {
        if self.total == 0 {
            return "No results".to_string();
        }
        format!(
            "Showing {} to {} of {} results · Page {} of {}",
            self.start + 1,
            self.end,
            self.total,
            self.page,
            self.pages
        )
    }
}

/// Records containing `term` in any field (case-insensitive), input order kept.
pub fn search<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.trim().to_lowercase();
    records.iter().filter(|r| r.contains_text(&needle)).collect()
}

/// Row bounds `(start, end, pages)` of a 1-based `page`.
/// An empty result set has zero pages and accepts page 1.
pub fn paginate(total: usize, page: usize, page_size: usize) -> AppResult<(usize, usize, usize)> {
    let pages = total.div_ceil(page_size.max(1));

    if total == 0 && page == 1 {
        return Ok((0, 0, 0));
    }
    if page == 0 || page > pages {
        return Err(AppError::InvalidPage { page, pages });
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    Ok((start, end, pages))
}

/// Text of one cell; `colour` turns the priority into an ANSI badge.
pub fn render_cell(
    record: &Record,
    column: &TableColumn,
    calendar: &BusinessCalendar,
    colour: bool,
) -> String {
    let value = match column.kind {
        ColumnKind::Field => record.text(column.key),
        ColumnKind::Date => record
            .timestamp(column.key)
            .map(|ts| format_local_date(ts, calendar.tz())),
        ColumnKind::Rep => record.text(column.key).map(|e| rep_name(Some(e.as_str()))),
        ColumnKind::Priority => {
            let p = Priority::of(record);
            Some(if colour { p.badge() } else { p.to_string() })
        }
        ColumnKind::ProcessingTime => processing_minutes(record, calendar)
            .map(|m| format_hours(minutes_to_hours(m))),
    };

    value.unwrap_or_else(|| MISSING.to_string())
}

pub fn render_row(
    record: &Record,
    columns: &[TableColumn],
    calendar: &BusinessCalendar,
    colour: bool,
) -> Vec<String> {
    columns
        .iter()
        .map(|c| render_cell(record, c, calendar, colour))
        .collect()
}

/// Search, then cut out `page` of `page_size` rows.
pub fn build_page(
    source: Source,
    records: &[Record],
    term: &str,
    page: usize,
    page_size: usize,
    calendar: &BusinessCalendar,
    colour: bool,
) -> AppResult<TablePage> {
    let columns = source.columns();
    let matches = search(records, term);
    let (start, end, pages) = paginate(matches.len(), page, page_size)?;

    Ok(TablePage {
        headers: columns.iter().map(|c| c.label.to_string()).collect(),
        rows: matches[start..end]
            .iter()
            .map(|r| render_row(r, columns, calendar, colour))
            .collect(),
        page,
        pages,
        total: matches.len(),
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_bounds() {
        assert_eq!(paginate(25, 1, 10).unwrap(), (0, 10, 3));
        assert_eq!(paginate(25, 3, 10).unwrap(), (20, 25, 3));
        assert_eq!(paginate(0, 1, 10).unwrap(), (0, 0, 0));
        assert!(paginate(25, 4, 10).is_err());
        assert!(paginate(25, 0, 10).is_err());
    }
}
