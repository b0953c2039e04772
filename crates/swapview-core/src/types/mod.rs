//! Domain types for swap exposure analytics.
//!
//! This module provides typed rows for the normalized filing tables:
//!
//! - [`FundHolding`]: A position disclosed in a filing
//! - [`FundInfo`]: Fund-level name and NAV
//! - [`SwapDetail`]: Swap contract terms
//! - [`CounterpartyLink`]: The other party to a swap
//! - [`FilingData`]: The four tables bundled for one analysis

mod counterparty;
mod filing;
mod fund_info;
mod holding;
mod swap;

// Re-export all types
pub use counterparty::{normalize_counterparty_name, CounterpartyLink, UNKNOWN_COUNTERPARTY};
pub use filing::{FilingData, FundOption};
pub use fund_info::FundInfo;
pub use holding::{FundHolding, SWAP_CATEGORY};
pub use swap::SwapDetail;
