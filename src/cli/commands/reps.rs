use crate::cli::commands::{load, use_colour};
use crate::cli::parser::Commands;
use crate::core::calculator::reps::rep_analytics;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::models::source::Source;
use crate::ui::messages::header;
use crate::ui::render;
use crate::utils::table::strip_ansi;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Reps { file } = cmd {
        let records = load(ctx, Source::Logos, file)?;
        let reps = rep_analytics(&records, &ctx.calendar);

        header("Logos by rep", &ctx.cfg.separator_char);
        let text = render::reps(&reps);
        if use_colour() {
            print!("{text}");
        } else {
            print!("{}", strip_ansi(&text));
        }
    }

    Ok(())
}
