use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::calculator::heatmap::Heatmap;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Heatmap { source, file } = cmd {
        let records = load(ctx, *source, file)?;
        let map = Heatmap::build(&records, source.date_field(), ctx.calendar.tz());

        header(
            format!("{} activity by day and hour ({})", source.label(), ctx.calendar.tz()),
            &ctx.cfg.separator_char,
        );
        print!("{}", render::heatmap(&map));
        println!("{} records", map.total());
    }

    Ok(())
}
