//! # SwapView Ext File
//!
//! Delimited-file loader for the SwapView filing tables.
//!
//! The four normalized tables are read from tab-separated files (any single
//! byte delimiter is supported) with declared column types: identifiers as
//! text, monetary fields as floating point converted to `Decimal`. Load
//! failures are reported before any aggregation runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod reader;
mod records;

pub use error::{LoadError, LoadResult};

use std::path::{Path, PathBuf};

use tracing::info;

use swapview_core::{
    CounterpartyLink, FilingData, FilingSource, FundHolding, FundInfo, SwapDetail,
};

use crate::reader::read_table;
use crate::records::{CounterpartyRecord, FundInfoRecord, HoldingRecord, SwapRecord};

/// Conventional file name of the holdings table.
pub const HOLDINGS_FILE: &str = "FUND_REPORTED_HOLDING.tsv";
/// Conventional file name of the fund info table.
pub const FUND_INFO_FILE: &str = "FUND_REPORTED_INFO.tsv";
/// Conventional file name of the swap table.
pub const SWAPS_FILE: &str = "NONFOREIGN_EXCHANGE_SWAP.tsv";
/// Conventional file name of the counterparty table.
pub const COUNTERPARTIES_FILE: &str = "DERIVATIVE_COUNTERPARTY.tsv";

/// Default delimiter of the filing extracts.
pub const TAB: u8 = b'\t';

/// Locations of the four filing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingPaths {
    /// Holdings table.
    pub holdings: PathBuf,
    /// Fund info table.
    pub fund_info: PathBuf,
    /// Swap detail table.
    pub swaps: PathBuf,
    /// Counterparty table.
    pub counterparties: PathBuf,
}

impl FilingPaths {
    /// Resolves the conventional file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            holdings: dir.join(HOLDINGS_FILE),
            fund_info: dir.join(FUND_INFO_FILE),
            swaps: dir.join(SWAPS_FILE),
            counterparties: dir.join(COUNTERPARTIES_FILE),
        }
    }
}

/// Loads filing tables from delimited files.
#[derive(Debug, Clone)]
pub struct TsvFilingSource {
    paths: FilingPaths,
    delimiter: u8,
}

impl TsvFilingSource {
    /// Create a source reading tab-separated files.
    pub fn new(paths: FilingPaths) -> Self {
        Self {
            paths,
            delimiter: TAB,
        }
    }

    /// Create a source for the conventional file names in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(FilingPaths::in_dir(dir))
    }

    /// Use a different field delimiter (e.g. `b','` for CSV extracts).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the table locations.
    pub fn paths(&self) -> &FilingPaths {
        &self.paths
    }

    /// Reads only the holdings table.
    pub fn load_holdings(&self) -> LoadResult<Vec<FundHolding>> {
        read_table::<HoldingRecord, _>(&self.paths.holdings, self.delimiter)
    }

    /// Reads only the fund info table.
    pub fn load_fund_info(&self) -> LoadResult<Vec<FundInfo>> {
        read_table::<FundInfoRecord, _>(&self.paths.fund_info, self.delimiter)
    }

    /// Reads only the swap table.
    pub fn load_swaps(&self) -> LoadResult<Vec<SwapDetail>> {
        read_table::<SwapRecord, _>(&self.paths.swaps, self.delimiter)
    }

    /// Reads only the counterparty table.
    pub fn load_counterparties(&self) -> LoadResult<Vec<CounterpartyLink>> {
        read_table::<CounterpartyRecord, _>(&self.paths.counterparties, self.delimiter)
    }
}

impl FilingSource for TsvFilingSource {
    type Error = LoadError;

    fn load(&self) -> Result<FilingData, LoadError> {
        let data = FilingData {
            holdings: self.load_holdings()?,
            fund_info: self.load_fund_info()?,
            swaps: self.load_swaps()?,
            counterparties: self.load_counterparties()?,
        };

        info!(
            holdings = data.holdings.len(),
            funds = data.fund_info.len(),
            swaps = data.swaps.len(),
            counterparties = data.counterparties.len(),
            "Loaded filing tables"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_in_dir() {
        let paths = FilingPaths::in_dir("/data/2024q4");
        assert_eq!(
            paths.holdings,
            PathBuf::from("/data/2024q4/FUND_REPORTED_HOLDING.tsv")
        );
        assert_eq!(
            paths.counterparties,
            PathBuf::from("/data/2024q4/DERIVATIVE_COUNTERPARTY.tsv")
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let source = TsvFilingSource::from_dir("/nonexistent/swapview");
        let err = source.load().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert_eq!(err.path(), source.paths().holdings.as_path());
    }
}
