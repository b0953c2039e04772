//! Swap contract detail rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contract terms for a swap holding, keyed by `holding_id`.
///
/// Every attribute is optional because the source filings leave cells
/// blank freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapDetail {
    /// Holding this swap describes.
    pub holding_id: String,

    /// Reference principal of the contract.
    pub notional_amount: Option<Decimal>,

    /// Unrealized appreciation (negative for depreciation).
    pub unrealized_appreciation: Option<Decimal>,

    /// Termination date as reported.
    pub termination_date: Option<String>,

    /// Floating rate index on the payment leg (e.g. `"SOFR"`).
    pub floating_rate_index_payment: Option<String>,

    /// Spread over the floating index on the payment leg, in basis points.
    pub floating_rate_spread_payment: Option<Decimal>,
}

impl SwapDetail {
    /// Creates an empty swap detail for a holding.
    #[must_use]
    pub fn new(holding_id: impl Into<String>) -> Self {
        Self {
            holding_id: holding_id.into(),
            ..Self::default()
        }
    }

    /// Sets the notional amount.
    #[must_use]
    pub fn with_notional(mut self, notional: Decimal) -> Self {
        self.notional_amount = Some(notional);
        self
    }

    /// Sets the unrealized appreciation.
    #[must_use]
    pub fn with_unrealized(mut self, appreciation: Decimal) -> Self {
        self.unrealized_appreciation = Some(appreciation);
        self
    }

    /// Sets the termination date.
    #[must_use]
    pub fn with_termination(mut self, date: impl Into<String>) -> Self {
        self.termination_date = Some(date.into());
        self
    }

    /// Sets the floating leg index and spread.
    #[must_use]
    pub fn with_floating_leg(mut self, index: impl Into<String>, spread_bp: Decimal) -> Self {
        self.floating_rate_index_payment = Some(index.into());
        self.floating_rate_spread_payment = Some(spread_bp);
        self
    }
}
