//! # SwapView Core
//!
//! Fund-level swap exposure analytics over normalized regulatory filing
//! tables.
//!
//! Given the holdings, fund info, swap and counterparty tables of a filing
//! set, [`summarize`] produces one fund's exposure report: total swap
//! notional, notional as a percentage of NAV, unrealized gains and a
//! per-counterparty breakdown.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: The aggregator borrows its inputs and performs no I/O
//! - **Exact arithmetic**: Monetary values are `Decimal`, so sums are exact
//! - **Tagged results**: Funds without swaps yield a distinct summary variant;
//!   unknown funds are an explicit error
//! - **Loader seam**: Data sources implement [`FilingSource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use swapview_core::prelude::*;
//!
//! let data = FilingData::new()
//!     .add_fund(FundInfo::new("0001", "2x Long XYZ ETF", dec!(10_000)))
//!     .add_holding(FundHolding::swap("0001", "H1"))
//!     .add_holding(FundHolding::swap("0001", "H2"))
//!     .add_swap(SwapDetail::new("H1").with_notional(dec!(12_000)))
//!     .add_swap(SwapDetail::new("H2").with_notional(dec!(8_000)))
//!     .add_counterparty(CounterpartyLink::new("H1", " Bank A "))
//!     .add_counterparty(CounterpartyLink::new("H2", "Bank A"));
//!
//! let summary = data.summarize("0001")?;
//! let exposure = summary.as_exposure().expect("fund holds swaps");
//!
//! assert_eq!(exposure.total_notional_exposure, dec!(20_000));
//! assert_eq!(exposure.notional_exposure_ratio.percent(), Some(dec!(200)));
//! assert_eq!(exposure.counterparties[0].name, "Bank A");
//! # Ok::<(), ExposureError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`exposure`] - Joins, aggregation and summary types
//! - [`source`] - The loader trait
//! - [`types`] - Table row types and the [`FilingData`] bundle

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod error;
pub mod exposure;
pub mod source;
pub mod types;

// Re-export error types at crate root
pub use error::{ExposureError, ExposureResult};

// Re-export main types
pub use types::{
    normalize_counterparty_name, CounterpartyLink, FilingData, FundHolding, FundInfo, FundOption,
    SwapDetail, SWAP_CATEGORY, UNKNOWN_COUNTERPARTY,
};

// Re-export exposure types and functions
pub use exposure::{
    format_rate, join_swaps, summarize, CounterpartyExposure, ExposureSummary, FundSummary,
    JoinedSwap, NoSwapSummary, NotionalRatio, NOT_APPLICABLE, NO_SWAPS_MESSAGE,
};

pub use source::FilingSource;

/// Prelude module for convenient imports.
///
/// ```rust
/// use swapview_core::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ExposureError, ExposureResult};

    // Table rows
    pub use crate::types::{CounterpartyLink, FilingData, FundHolding, FundInfo, SwapDetail};

    // Aggregation
    pub use crate::exposure::{
        summarize, CounterpartyExposure, ExposureSummary, FundSummary, NotionalRatio,
    };

    // Loading
    pub use crate::source::FilingSource;

    // Re-export commonly used types from dependencies
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = ExposureError::fund_not_found("X");
        assert!(err.to_string().contains("not found"));
    }
}
