//! Derivative counterparty rows.

use serde::{Deserialize, Serialize};

/// Label used when a swap has no usable counterparty name.
pub const UNKNOWN_COUNTERPARTY: &str = "Unknown";

/// Associates a holding with the other party to its contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyLink {
    /// Holding this counterparty is attached to.
    pub holding_id: String,

    /// Counterparty name as reported, possibly blank or padded.
    pub counterparty_name: Option<String>,
}

impl CounterpartyLink {
    /// Creates a named counterparty link.
    #[must_use]
    pub fn new(holding_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            holding_id: holding_id.into(),
            counterparty_name: Some(name.into()),
        }
    }

    /// Creates a link whose name was left blank in the filing.
    #[must_use]
    pub fn unnamed(holding_id: impl Into<String>) -> Self {
        Self {
            holding_id: holding_id.into(),
            counterparty_name: None,
        }
    }
}

/// Normalizes a raw counterparty name into its grouping key.
///
/// Leading and trailing whitespace is removed. Missing names, and names
/// that are empty after trimming, become [`UNKNOWN_COUNTERPARTY`]. No case
/// folding is applied.
#[must_use]
pub fn normalize_counterparty_name(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_COUNTERPARTY,
    }
}
