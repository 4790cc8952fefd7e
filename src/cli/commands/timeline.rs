use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::calculator::timeline::build_daily_series;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::ui::render;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Timeline { source, file } = cmd {
        let records = load(ctx, *source, file)?;
        let series = build_daily_series(&records, source.date_field());

        header(format!("{} creation timeline", source.label()), &ctx.cfg.separator_char);
        if series.is_empty() {
            warning("No dated records in the selected window.");
        } else {
            print!("{}", render::series(&series));
        }
    }

    Ok(())
}
