use crate::types::{LogLevel, OrderArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Turn session records into calendar date-highlight attributes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml [default: $AGENDA_PATH or ~/.agenda]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Output format [default: config output.format, else plain]
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform session records into calendar attributes
    Dates {
        /// JSON file with session records; `-` or omitted reads stdin
        #[arg(long, short)]
        input: Option<PathBuf>,

        #[arg(long)]
        order: Option<OrderArg>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        offset: Option<usize>,

        /// Only accept exact `Date.toISOString()` timestamps
        #[arg(long)]
        strict: bool,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Transform the built-in sample sessions
    Demo {
        #[arg(long)]
        compact: bool,
    },

    /// Show the effective configuration
    Config,
}
