//! Summarize command implementation.
//!
//! Renders one fund's swap exposure and optionally writes the JSON report.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgGroup, Args};
use tabled::Tabled;
use tracing::info;

use swapview_core::{ExposureSummary, FundSummary};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{
    format_currency, print_header, print_info, print_json, print_success, print_table, KeyValue,
};

/// Arguments for the summarize command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["fund", "name"])))]
pub struct SummarizeArgs {
    /// Accession number of the fund filing
    #[arg(long)]
    pub fund: Option<String>,

    /// Series name of the fund (as listed by `swapview funds`)
    #[arg(long)]
    pub name: Option<String>,

    /// Write the JSON report to `<report_dir>/<series name>_report.json`
    #[arg(long)]
    pub report: bool,

    /// Write the JSON report to this path
    #[arg(short, long, conflicts_with = "report")]
    pub output: Option<PathBuf>,
}

#[derive(Tabled)]
struct CounterpartyRow {
    #[tabled(rename = "Counterparty")]
    name: String,
    #[tabled(rename = "Notional")]
    notional: String,
    #[tabled(rename = "Termination")]
    termination: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

/// Execute the summarize command.
pub fn execute(args: SummarizeArgs, ctx: &Context) -> Result<()> {
    let data = ctx.load_filings()?;

    let accession_number = match (&args.fund, &args.name) {
        (Some(fund), _) => fund.clone(),
        (None, Some(name)) => data.find_fund_by_name(name)?.to_string(),
        (None, None) => anyhow::bail!("Either --fund or --name is required"),
    };

    let summary = data.summarize(&accession_number)?;
    info!(
        accession_number = %accession_number,
        fund = summary.fund_name(),
        has_swaps = summary.is_exposure(),
        counterparties = summary
            .as_exposure()
            .map_or(0, ExposureSummary::counterparty_count),
        "Summarized fund"
    );

    match ctx.format {
        OutputFormat::Table => render_table(&summary),
        OutputFormat::Json => print_json(&summary)?,
    }

    let destination = match (args.output, args.report) {
        (Some(path), _) => Some(path),
        (None, true) => Some(default_report_path(&ctx.config.report_dir, summary.fund_name())),
        (None, false) => None,
    };
    if let Some(path) = destination {
        write_report(&summary, &path)?;
        if !ctx.quiet {
            print_success(&format!("Report written to {}", path.display()));
        }
    }

    Ok(())
}

/// Report file for a fund: `<dir>/<series name>_report.json`.
///
/// Path separators in the series name are replaced so the report always
/// lands inside `dir`.
pub fn default_report_path(dir: &Path, fund_name: &str) -> PathBuf {
    let stem: String = fund_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    dir.join(format!("{stem}_report.json"))
}

fn write_report(summary: &FundSummary, path: &Path) -> Result<()> {
    let json = summary.to_json_pretty()?;
    std::fs::write(path, json).map_err(|source| CliError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn render_table(summary: &FundSummary) {
    print_header(&format!("Results for {}", summary.fund_name()));

    match summary {
        FundSummary::NoSwaps(empty) => print_info(&empty.message),
        FundSummary::Exposure(exposure) => {
            print_table(&metric_rows(exposure));

            print_header("Swap Counterparty Breakdown");
            let rows: Vec<CounterpartyRow> = exposure
                .counterparties
                .iter()
                .map(|c| CounterpartyRow {
                    name: c.name.clone(),
                    notional: format_currency(c.notional),
                    termination: c.termination.clone(),
                    rate: c.rate.clone(),
                })
                .collect();
            print_table(&rows);
        }
    }
}

fn metric_rows(exposure: &ExposureSummary) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Total Holdings", exposure.total_holdings.to_string()),
        KeyValue::from_currency("Total Notional Exposure", exposure.total_notional_exposure),
        match exposure.nav {
            Some(nav) => KeyValue::from_currency("NAV", nav),
            None => KeyValue::new("NAV", swapview_core::NOT_APPLICABLE),
        },
        KeyValue::new(
            "Notional Exposure/NAV Ratio",
            exposure.notional_exposure_ratio.to_string(),
        ),
        KeyValue::from_currency("Unrealized Gains/Losses", exposure.unrealized_gains),
    ]
}
