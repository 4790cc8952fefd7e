//! Table rendering utilities for CLI outputs.
//!
//! Column widths follow the widest visible cell (ANSI colour codes do not
//! count). Cells longer than a column's `max_width` wrap onto extra lines.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Terminal width of `s` ignoring colour codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub max_width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: 40,
            align: Align::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(1);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[String]) -> Self {
        Self::new(headers.iter().map(|h| Column::new(h)).collect())
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width).max(visible_width(&col.header))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, col.align));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (_, w))| wrap_cell(row.get(i).map_or("", String::as_str), *w))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                for ((col, w), cell) in self.columns.iter().zip(&widths).zip(&cells) {
                    let text = cell.get(line).map_or("", String::as_str);
                    out.push_str(&pad(text, *w, col.align));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Split a cell into lines of at most `width` columns.
/// Coloured cells are short badges and are kept on one line.
fn wrap_cell(cell: &str, width: usize) -> Vec<String> {
    if visible_width(cell) <= width || cell.contains('\x1b') {
        return vec![cell.to_string()];
    }
    textwrap::wrap(cell, width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(visible_width(s)));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_codes_do_not_count() {
        assert_eq!(visible_width("\x1b[31mRush\x1b[0m"), 4);
    }

    #[test]
    fn long_cells_wrap() {
        let mut t = Table::new(vec![Column::new("Description").max_width(12), Column::new("N")]);
        t.add_row(vec!["two colour front print".into(), "1".into()]);

        let out = t.render();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().all(|l| visible_width(l.trim_end()) <= 14));
    }

    #[test]
    fn right_alignment() {
        let mut t = Table::new(vec![Column::new("Count").right()]);
        t.add_row(vec!["7".into()]);
        assert!(t.render().contains("    7 "));
    }
}
