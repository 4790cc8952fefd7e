use crate::cli::commands::load;
use crate::cli::parser::Commands;
use crate::core::calculator::distribution::product_types;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::models::source::Source;
use crate::ui::messages::header;
use crate::ui::render;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Products { file } = cmd {
        let records = load(ctx, Source::Mockups, file)?;
        let types = product_types(&records);

        header("Mockups by product type", &ctx.cfg.separator_char);
        print!("{}", render::product_types(&types, records.len()));
    }

    Ok(())
}
