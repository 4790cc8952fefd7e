use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::calculator::distribution::{status_distribution, status_summary};
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::models::source::Source;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Status { file } = cmd {
        let records = load(ctx, Source::Mockups, file)?;
        let shares = status_distribution(&records);
        let summary = status_summary(&shares);

        header("Mockup status distribution", &ctx.cfg.separator_char);
        print!("{}", render::status(&shares, &summary, records.len()));
    }

    Ok(())
}
