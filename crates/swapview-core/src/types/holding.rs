//! Fund holding rows.

use serde::{Deserialize, Serialize};

/// Derivative category code reported for swap holdings.
pub const SWAP_CATEGORY: &str = "SWP";

/// A single instrument position disclosed within a fund filing.
///
/// Many holdings share one accession number; `holding_id` is unique within
/// a filing and keys the swap and counterparty detail tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundHolding {
    /// Filing identifier this holding belongs to.
    pub accession_number: String,

    /// Holding identifier, unique within the filing.
    pub holding_id: String,

    /// Derivative category code (`"SWP"` for swaps). Absent for
    /// non-derivative holdings.
    pub derivative_category: Option<String>,
}

impl FundHolding {
    /// Creates a holding without a derivative category.
    #[must_use]
    pub fn new(accession_number: impl Into<String>, holding_id: impl Into<String>) -> Self {
        Self {
            accession_number: accession_number.into(),
            holding_id: holding_id.into(),
            derivative_category: None,
        }
    }

    /// Creates a swap holding.
    #[must_use]
    pub fn swap(accession_number: impl Into<String>, holding_id: impl Into<String>) -> Self {
        Self::new(accession_number, holding_id).with_category(SWAP_CATEGORY)
    }

    /// Sets the derivative category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.derivative_category = Some(category.into());
        self
    }

    /// Returns true if this holding belongs to the given filing.
    #[must_use]
    pub fn belongs_to(&self, accession_number: &str) -> bool {
        self.accession_number == accession_number
    }

    /// Returns true if the holding is reported as a swap.
    #[must_use]
    pub fn is_swap(&self) -> bool {
        self.derivative_category.as_deref() == Some(SWAP_CATEGORY)
    }
}
