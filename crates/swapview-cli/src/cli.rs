//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{FundsArgs, SummarizeArgs};

/// SwapView - Fund swap exposure reports from regulatory filing tables
#[derive(Parser)]
#[command(name = "swapview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./swapview.toml when present)
    #[arg(short, long, global = true, env = "SWAPVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the filing tables (overrides the config file)
    #[arg(short, long, global = true, env = "SWAPVIEW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Field delimiter of the tables (overrides the config file)
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the funds available in the filing tables
    Funds(FundsArgs),

    /// Summarize the swap exposure of one fund
    Summarize(SummarizeArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
