//! Loader seam for filing tables.
//!
//! The core never performs I/O. Anything that can produce a [`FilingData`]
//! snapshot (delimited files, a database extract, fixtures) implements
//! [`FilingSource`]; load failures surface here, before aggregation runs.

use crate::types::FilingData;

/// A source of filing table snapshots.
pub trait FilingSource {
    /// Error produced when the tables cannot be loaded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Loads all four tables.
    fn load(&self) -> Result<FilingData, Self::Error>;
}
