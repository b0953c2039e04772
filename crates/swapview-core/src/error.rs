//! Error types for exposure analytics.
//!
//! This module defines the error types used throughout the core crate.

use thiserror::Error;

/// Result type for exposure operations.
pub type ExposureResult<T> = Result<T, ExposureError>;

/// Errors that can occur while summarizing a fund.
///
/// A fund without swap holdings is not an error; it is reported through
/// [`FundSummary::NoSwaps`](crate::FundSummary::NoSwaps).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExposureError {
    /// The accession number has no row in the fund info table.
    #[error("Fund not found: no fund info for accession number '{accession_number}'")]
    FundNotFound {
        /// The accession number that was requested.
        accession_number: String,
    },

    /// No fund carries the requested series name.
    #[error("Fund not found: no series named '{series_name}'")]
    SeriesNotFound {
        /// The series name that was requested.
        series_name: String,
    },

    /// A running total left the decimal range.
    #[error("Arithmetic overflow while summing {field}")]
    Overflow {
        /// The total that overflowed.
        field: &'static str,
    },

    /// Serializing a summary failed.
    #[error("Serialization failed: {reason}")]
    Serialization {
        /// The reason serialization failed.
        reason: String,
    },
}

impl ExposureError {
    /// Create a fund not found error.
    #[must_use]
    pub fn fund_not_found(accession_number: impl Into<String>) -> Self {
        Self::FundNotFound {
            accession_number: accession_number.into(),
        }
    }

    /// Create a series not found error.
    #[must_use]
    pub fn series_not_found(series_name: impl Into<String>) -> Self {
        Self::SeriesNotFound {
            series_name: series_name.into(),
        }
    }

    /// Create an overflow error.
    #[must_use]
    pub fn overflow(field: &'static str) -> Self {
        Self::Overflow { field }
    }

    /// Returns true if the error means the requested fund does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FundNotFound { .. } | Self::SeriesNotFound { .. })
    }
}

impl From<serde_json::Error> for ExposureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
