//! Bundle of the four normalized filing tables.

use serde::{Deserialize, Serialize};

use super::{CounterpartyLink, FundHolding, FundInfo, SwapDetail};
use crate::error::{ExposureError, ExposureResult};
use crate::exposure::{summarize, FundSummary};

/// A read-only snapshot of the filing tables used for one analysis.
///
/// # Example
///
/// ```rust
/// use swapview_core::prelude::*;
///
/// let data = FilingData::new()
///     .add_fund(FundInfo::new("0001", "Single Stock ETF", dec!(1_000)))
///     .add_holding(FundHolding::swap("0001", "H1"))
///     .add_swap(SwapDetail::new("H1").with_notional(dec!(2_000)))
///     .add_counterparty(CounterpartyLink::new("H1", "Bank A"));
///
/// let summary = data.summarize("0001").unwrap();
/// assert_eq!(summary.fund_name(), "Single Stock ETF");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilingData {
    /// Holding rows across all filings.
    pub holdings: Vec<FundHolding>,

    /// Fund info rows, one per filing.
    pub fund_info: Vec<FundInfo>,

    /// Swap detail rows.
    pub swaps: Vec<SwapDetail>,

    /// Counterparty rows.
    pub counterparties: Vec<CounterpartyLink>,
}

/// A selectable fund: its display name and accession number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundOption {
    /// Series name shown to the user.
    pub series_name: String,

    /// Accession number passed to the aggregator.
    pub accession_number: String,
}

impl FilingData {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holding row.
    #[must_use]
    pub fn add_holding(mut self, holding: FundHolding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// Adds multiple holding rows.
    #[must_use]
    pub fn add_holdings(mut self, holdings: impl IntoIterator<Item = FundHolding>) -> Self {
        self.holdings.extend(holdings);
        self
    }

    /// Adds a fund info row.
    #[must_use]
    pub fn add_fund(mut self, info: FundInfo) -> Self {
        self.fund_info.push(info);
        self
    }

    /// Adds a swap detail row.
    #[must_use]
    pub fn add_swap(mut self, swap: SwapDetail) -> Self {
        self.swaps.push(swap);
        self
    }

    /// Adds multiple swap detail rows.
    #[must_use]
    pub fn add_swaps(mut self, swaps: impl IntoIterator<Item = SwapDetail>) -> Self {
        self.swaps.extend(swaps);
        self
    }

    /// Adds a counterparty row.
    #[must_use]
    pub fn add_counterparty(mut self, link: CounterpartyLink) -> Self {
        self.counterparties.push(link);
        self
    }

    /// Adds multiple counterparty rows.
    #[must_use]
    pub fn add_counterparties(mut self, links: impl IntoIterator<Item = CounterpartyLink>) -> Self {
        self.counterparties.extend(links);
        self
    }

    /// Returns the funds available for selection, in fund info order.
    #[must_use]
    pub fn fund_options(&self) -> Vec<FundOption> {
        self.fund_info
            .iter()
            .map(|info| FundOption {
                series_name: info.series_name.clone(),
                accession_number: info.accession_number.clone(),
            })
            .collect()
    }

    /// Resolves a series name to its accession number.
    ///
    /// When several filings share a series name, the last one listed wins,
    /// matching how a name-keyed selection list collapses duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::SeriesNotFound`] if no fund has that name.
    pub fn find_fund_by_name(&self, series_name: &str) -> ExposureResult<&str> {
        self.fund_info
            .iter()
            .rev()
            .find(|info| info.series_name == series_name)
            .map(|info| info.accession_number.as_str())
            .ok_or_else(|| ExposureError::series_not_found(series_name))
    }

    /// Summarizes the swap exposure of one fund.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::FundNotFound`] if the accession number has no
    /// fund info row.
    pub fn summarize(&self, accession_number: &str) -> ExposureResult<FundSummary> {
        summarize(
            accession_number,
            &self.holdings,
            &self.fund_info,
            &self.swaps,
            &self.counterparties,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> FilingData {
        FilingData::new()
            .add_fund(FundInfo::new("A1", "Alpha 2x", dec!(100)))
            .add_fund(FundInfo::new("B1", "Beta 2x", dec!(200)))
            .add_fund(FundInfo::new("B2", "Beta 2x", dec!(300)))
    }

    #[test]
    fn test_fund_options_keep_order() {
        let options = sample().fund_options();
        let names: Vec<_> = options.iter().map(|o| o.series_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha 2x", "Beta 2x", "Beta 2x"]);
        assert_eq!(options[0].accession_number, "A1");
    }

    #[test]
    fn test_find_fund_by_name() {
        let data = sample();
        assert_eq!(data.find_fund_by_name("Alpha 2x").unwrap(), "A1");
        // Duplicate names resolve to the last filing listed
        assert_eq!(data.find_fund_by_name("Beta 2x").unwrap(), "B2");

        let err = data.find_fund_by_name("Gamma").unwrap_err();
        assert!(matches!(err, ExposureError::SeriesNotFound { .. }));
    }

    #[test]
    fn test_summarize_unknown_fund() {
        let err = sample().summarize("ZZZ").unwrap_err();
        assert_eq!(err, ExposureError::fund_not_found("ZZZ"));
    }
}
