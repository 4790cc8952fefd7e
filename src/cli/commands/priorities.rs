use crate::cli::commands::{load, use_colour};
use crate::cli::parser::Commands;
use crate::core::calculator::processing::priority_analysis;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::models::source::Source;
use crate::ui::messages::{header, info};
use crate::ui::render;
use crate::utils::table::strip_ansi;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Priorities { file } = cmd {
        let records = load(ctx, Source::Logos, file)?;
        let stats = priority_analysis(&records, &ctx.calendar);
        let (open, close) = ctx.calendar.hours();

        header(
            "Processing time by priority (business hours only)",
            &ctx.cfg.separator_char,
        );
        info(format!(
            "{open:02}:00-{close:02}:00 {}, Monday-Friday, outliers removed (IQR)",
            ctx.calendar.tz()
        ));
        let text = render::category_stats(&stats, "Priority");
        if use_colour() {
            print!("{text}");
        } else {
            print!("{}", strip_ansi(&text));
        }
    }

    Ok(())
}
