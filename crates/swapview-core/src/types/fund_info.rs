//! Fund-level filing information.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row per fund filing.
///
/// `accession_number` is expected to be unique across the table. When it
/// is not, lookups use the first matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundInfo {
    /// Filing identifier.
    pub accession_number: String,

    /// Display name of the fund series.
    pub series_name: String,

    /// Net asset value of the fund.
    pub net_assets: Option<Decimal>,
}

impl FundInfo {
    /// Creates a fund info row with a known NAV.
    #[must_use]
    pub fn new(
        accession_number: impl Into<String>,
        series_name: impl Into<String>,
        net_assets: Decimal,
    ) -> Self {
        Self {
            accession_number: accession_number.into(),
            series_name: series_name.into(),
            net_assets: Some(net_assets),
        }
    }

    /// Removes the NAV, as when the filing leaves it blank.
    #[must_use]
    pub fn without_net_assets(mut self) -> Self {
        self.net_assets = None;
        self
    }

    /// Returns the NAV if it can be used as a ratio denominator.
    ///
    /// Zero and absent NAVs both yield `None`.
    #[must_use]
    pub fn usable_net_assets(&self) -> Option<Decimal> {
        self.net_assets.filter(|nav| !nav.is_zero())
    }
}
