use crate::cli::commands::{load, use_colour};
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::table::build_page;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Table {
        source,
        file,
        search,
        page,
    } = cmd
    {
        let records = load(ctx, *source, file)?;
        let colour = use_colour();
        let term = search.as_deref().unwrap_or("");

        let result = build_page(
            *source,
            &records,
            term,
            *page,
            ctx.cfg.page_size,
            &ctx.calendar,
            colour,
        )?;

        let footer = result.footer();
        header(format!("Complete {} database", source.label()), &ctx.cfg.separator_char);

        let mut table = Table::with_headers(&result.headers);
        for row in result.rows {
            table.add_row(if colour {
                row.iter().map(|c| colorize_optional(c)).collect()
            } else {
                row
            });
        }
        print!("{}", table.render());
        println!("{footer}");
    }

    Ok(())
}
