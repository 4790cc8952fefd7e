use crate::cli::commands::use_colour;
use crate::cli::parser::Commands;
use crate::core::context::AppContext;
use crate::core::loader::{LoadOptions, RecordLoader};
use crate::core::metrics::overview;
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::models::source::Source;
use crate::ui::messages::{header, warning};
use crate::ui::render;
use crate::utils::path::expand_tilde;
use crate::utils::table::strip_ansi;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Overview {
        mockups,
        logos,
        stores,
    } = cmd
    {
        let inputs: Vec<(Source, PathBuf)> = [
            (Source::Mockups, mockups),
            (Source::Logos, logos),
            (Source::Stores, stores),
        ]
        .into_iter()
        .filter_map(|(source, file)| file.as_deref().map(|f| (source, expand_tilde(f))))
        .collect();

        if inputs.is_empty() {
            warning("No input files given (use --mockups, --logos and/or --stores).");
            return Ok(());
        }

        let loaded = RecordLoader::new(LoadOptions::from_context(ctx)).load_many(&inputs)?;
        let ov = overview(
            records_of(&loaded, Source::Mockups),
            records_of(&loaded, Source::Logos),
            records_of(&loaded, Source::Stores),
            ctx.now,
        );

        header("Studio overview", &ctx.cfg.separator_char);
        let text = render::overview(&ov, ctx.calendar.tz());
        if use_colour() {
            print!("{text}");
        } else {
            print!("{}", strip_ansi(&text));
        }
    }

    Ok(())
}

fn records_of(loaded: &[(Source, Vec<Record>)], wanted: Source) -> &[Record] {
    loaded
        .iter()
        .find(|(s, _)| *s == wanted)
        .map(|(_, records)| records.as_slice())
        .unwrap_or(&[])
}
