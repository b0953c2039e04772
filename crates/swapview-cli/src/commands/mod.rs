//! CLI command implementations.

pub mod funds;
pub mod summarize;

// Re-export submodules for convenience
pub use funds::FundsArgs;
pub use summarize::SummarizeArgs;

use anyhow::{Context as _, Result};
use swapview_core::{FilingData, FilingSource};
use swapview_ext_file::TsvFilingSource;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::CliConfig;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved configuration
    pub config: CliConfig,
    /// Output format
    pub format: OutputFormat,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Context {
    /// Loads the four filing tables described by the configuration.
    ///
    /// Fails before any analysis if a table is missing or malformed.
    pub fn load_filings(&self) -> Result<FilingData> {
        let paths = self.config.filing_paths();
        debug!(?paths, "Loading filing tables");

        let source = TsvFilingSource::new(paths).with_delimiter(self.config.delimiter_byte()?);
        source.load().context("Failed to load filing tables")
    }
}
