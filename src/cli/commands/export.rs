use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::calculator::processing::priority_analysis;
use crate::core::calculator::reps::rep_analytics;
use crate::core::calculator::timeline::build_daily_series;
use crate::core::context::AppContext;
use crate::core::table::{render_row, search};
use crate::errors::AppResult;
use crate::export::{ExportLogic, Report, ReportKind};
use crate::models::source::Source;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        report,
        file,
        source,
        format,
        out,
        search: term,
        force,
    } = cmd
    {
        let report = build_report(*report, *source, file, term.as_deref(), ctx)?;
        ExportLogic::export(&report, *format, out, *force)?;
    }
    Ok(())
}

/// Compute the requested report. Priorities and reps always read logos.
pub fn build_report(
    kind: ReportKind,
    source: Source,
    file: &str,
    term: Option<&str>,
    ctx: &AppContext,
) -> AppResult<Report> {
    match kind {
        ReportKind::Priorities => {
            let records = load(ctx, Source::Logos, file)?;
            Report::from_rows("Priorities", &priority_analysis(&records, &ctx.calendar))
        }
        ReportKind::Reps => {
            let records = load(ctx, Source::Logos, file)?;
            Report::from_rows("Reps", &rep_analytics(&records, &ctx.calendar))
        }
        ReportKind::Timeline => {
            let records = load(ctx, source, file)?;
            Report::from_rows(
                &format!("{} timeline", source.label()),
                &build_daily_series(&records, source.date_field()),
            )
        }
        ReportKind::Records => {
            let records = load(ctx, source, file)?;
            let columns = source.columns();
            let rows = search(&records, term.unwrap_or(""))
                .into_iter()
                .map(|r| render_row(r, columns, &ctx.calendar, false))
                .collect();

            Ok(Report::from_table(
                source.label(),
                columns.iter().map(|c| c.label.to_string()).collect(),
                rows,
            ))
        }
    }
}
