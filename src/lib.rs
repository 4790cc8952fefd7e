//! rStudioMetrics library root.
//! Exposes the CLI parser, the high-level run() function, and the analytics
//! modules (business-hours calculator, robust statistics, reports).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::Utc;
use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_required_timestamp;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    // init and config must work even when the config file is broken
    match &cli.command {
        Commands::Init { .. } => return cli::commands::init::handle(cli),
        Commands::Config { .. } => return cli::commands::config::handle(cli),
        _ => {}
    }

    let ctx = build_context(cli)?;

    match &cli.command {
        Commands::Overview { .. } => cli::commands::overview::handle(&cli.command, &ctx),
        Commands::Metrics { .. } => cli::commands::metrics::handle(&cli.command, &ctx),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, &ctx),
        Commands::Heatmap { .. } => cli::commands::heatmap::handle(&cli.command, &ctx),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, &ctx),
        Commands::Products { .. } => cli::commands::products::handle(&cli.command, &ctx),
        Commands::Priorities { .. } => cli::commands::priorities::handle(&cli.command, &ctx),
        Commands::Reps { .. } => cli::commands::reps::handle(&cli.command, &ctx),
        Commands::Table { .. } => cli::commands::table::handle(&cli.command, &ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &ctx),
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// Load the configuration once and apply command-line overrides.
pub fn build_context(cli: &Cli) -> AppResult<AppContext> {
    let path = cli.config.as_deref().map(expand_tilde);
    let mut cfg = Config::load(path.as_deref())?;

    if let Some(days) = cli.window_days {
        cfg.window_days = days;
        cfg.validate()?;
    }

    let now = match &cli.now {
        Some(s) => parse_required_timestamp(s)?,
        None => Utc::now(),
    };

    tracing::debug!(
        timezone = %cfg.timezone,
        window_days = cfg.window_days,
        now = %now,
        "context ready"
    );

    AppContext::new(cfg, now)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    dispatch(&cli)
}
