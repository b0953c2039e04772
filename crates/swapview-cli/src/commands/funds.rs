//! Funds command implementation.
//!
//! Lists the funds that can be summarized.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_header, print_json, print_table};

/// Arguments for the funds command.
#[derive(Args, Debug)]
pub struct FundsArgs {
    /// Only list funds whose series name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Tabled)]
struct FundRow {
    #[tabled(rename = "Series Name")]
    series_name: String,
    #[tabled(rename = "Accession Number")]
    accession_number: String,
}

/// Execute the funds command.
pub fn execute(args: FundsArgs, ctx: &Context) -> Result<()> {
    let data = ctx.load_filings()?;

    let needle = args.search.as_deref().map(str::to_lowercase);
    let options: Vec<_> = data
        .fund_options()
        .into_iter()
        .filter(|o| {
            needle
                .as_deref()
                .map_or(true, |n| o.series_name.to_lowercase().contains(n))
        })
        .collect();

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Funds");
            }
            let rows: Vec<FundRow> = options
                .into_iter()
                .map(|o| FundRow {
                    series_name: o.series_name,
                    accession_number: o.accession_number,
                })
                .collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&options)?,
    }

    Ok(())
}
