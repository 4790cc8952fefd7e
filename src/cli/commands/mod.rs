pub mod config;
pub mod export;
pub mod heatmap;
pub mod init;
pub mod metrics;
pub mod overview;
pub mod priorities;
pub mod products;
pub mod reps;
pub mod status;
pub mod table;
pub mod timeline;

use crate::core::context::AppContext;
use crate::core::loader::{LoadOptions, RecordLoader};
use crate::errors::AppResult;
use crate::models::record::Record;
use crate::models::source::Source;
use crate::utils::path::expand_tilde;
use std::io::IsTerminal;

/// Load `file` as records of `source`, narrowed to the configured window.
pub(crate) fn load(ctx: &AppContext, source: Source, file: &str) -> AppResult<Vec<Record>> {
    RecordLoader::new(LoadOptions::from_context(ctx)).load(source, &expand_tilde(file))
}

/// Colour badges only when writing to a terminal.
pub(crate) fn use_colour() -> bool {
    std::io::stdout().is_terminal()
}
