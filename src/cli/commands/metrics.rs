use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::metrics::performance_metrics;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Metrics { source, file } = cmd {
        let records = load(ctx, *source, file)?;
        let cards = performance_metrics(*source, &records, &ctx.calendar, ctx.now);

        header(format!("{} metrics", source.label()), &ctx.cfg.separator_char);
        print!("{}", render::cards(&cards));
    }

    Ok(())
}
