// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in `format`.
    ///
    /// `file` must be absolute (after `~` expansion). An existing file is
    /// only replaced with `force` or after confirmation. An empty report
    /// writes nothing.
    pub fn export(report: &Report, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if report.is_empty() {
            warning(format!("No rows to export for {}.", report.title));
            return Ok(());
        }

        ensure_writable(&path, force)?;

        tracing::debug!(
            format = format.as_str(),
            rows = report.rows.len(),
            path = %path.display(),
            "exporting report"
        );

        match format {
            ExportFormat::Csv => export_csv(report, &path),
            ExportFormat::Json => export_json(report, &path),
            ExportFormat::Xlsx => export_xlsx(report, &path),
        }
    }
}
