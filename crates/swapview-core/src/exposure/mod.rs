//! Fund-level swap exposure.
//!
//! This module turns the normalized filing tables into a single fund's
//! exposure report:
//! - Scoping holdings to one filing
//! - Left-joining swap terms and counterparties
//! - Notional, NAV ratio and unrealized gain totals
//! - Counterparty breakdown in first-seen order
//!
//! All functions are pure - they borrow the tables and return newly built
//! results. No caching, no I/O, no side effects.

mod aggregate;
mod join;
mod summary;

pub use aggregate::*;
pub use join::*;
pub use summary::*;
