//! SwapView CLI - Fund swap exposure reports.
//!
//! # Usage
//!
//! ```bash
//! # List funds in the filing tables under ./data
//! swapview funds --data-dir data
//!
//! # Summarize one fund by accession number
//! swapview summarize --fund 0001683863-24-001111
//!
//! # Summarize by series name and write the JSON report
//! swapview summarize --name "2x Long TSLA Daily ETF" --report
//!
//! # JSON to stdout
//! swapview --format json summarize --fund 0001683863-24-001111
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    let default_directives = if cli.verbose {
        "swapview=debug,swapview_core=debug,swapview_ext_file=debug"
    } else if cli.quiet {
        "warn"
    } else {
        "swapview=info,swapview_core=info,swapview_ext_file=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = CliConfig::resolve(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }

    let ctx = Context {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Funds(args) => commands::funds::execute(args, &ctx)?,
        Commands::Summarize(args) => commands::summarize::execute(args, &ctx)?,
    }

    Ok(())
}
