use crate::export::{ExportFormat, ReportKind};
use crate::models::source::Source;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStudioMetrics
/// CLI application to analyze Airtable exports of mockups, logos and store orders
#[derive(Parser)]
#[command(
    name = "rstudiometrics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Studio analytics from Airtable exports: volumes, pipelines and business-hours processing times",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Reference instant for windows and deadlines (RFC 3339, default: now)
    #[arg(global = true, long = "now", value_name = "TIMESTAMP")]
    pub now: Option<String>,

    /// Override the trailing window in days (0 = keep every record)
    #[arg(global = true, long = "window-days", value_name = "DAYS")]
    pub window_days: Option<i64>,

    /// Print debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Landing summary across mockups, logos and store orders
    Overview {
        #[arg(long, value_name = "FILE", help = "Mockups export (JSON)")]
        mockups: Option<String>,

        #[arg(long, value_name = "FILE", help = "Logos export (JSON)")]
        logos: Option<String>,

        #[arg(long, value_name = "FILE", help = "Store orders export (JSON)")]
        stores: Option<String>,
    },

    /// Headline metric cards for one source
    Metrics {
        #[arg(value_enum)]
        source: Source,

        #[arg(long, value_name = "FILE", help = "Airtable export (JSON)")]
        file: String,
    },

    /// Daily creation counts with cumulative total
    Timeline {
        #[arg(value_enum)]
        source: Source,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Creation activity by weekday and hour
    Heatmap {
        #[arg(value_enum)]
        source: Source,

        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Mockup pipeline status distribution
    Status {
        #[arg(long, value_name = "FILE", help = "Mockups export (JSON)")]
        file: String,
    },

    /// Mockups per product type
    Products {
        #[arg(long, value_name = "FILE", help = "Mockups export (JSON)")]
        file: String,
    },

    /// Logo processing time by priority (business hours, outliers removed)
    Priorities {
        #[arg(long, value_name = "FILE", help = "Logos export (JSON)")]
        file: String,
    },

    /// Logo volume and turnaround per rep
    Reps {
        #[arg(long, value_name = "FILE", help = "Logos export (JSON)")]
        file: String,
    },

    /// Searchable, paginated record table
    Table {
        #[arg(value_enum)]
        source: Source,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Case-insensitive text to search in every field")]
        search: Option<String>,

        #[arg(long, short, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,
    },

    /// Export a derived report
    Export {
        #[arg(value_enum)]
        report: ReportKind,

        #[arg(long, value_name = "FILE", help = "Airtable export (JSON)")]
        file: String,

        #[arg(
            long,
            value_enum,
            default_value = "logos",
            help = "Source of the records (timeline and records reports)"
        )]
        source: Source,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "PATH", help = "Absolute output path")]
        out: String,

        #[arg(long, short, help = "Only rows matching this text (records report)")]
        search: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
