//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {}: {reason}", .path.display())]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Invalid delimiter setting.
    #[error("Invalid delimiter {0:?}. Use a single ASCII character such as \"\\t\" or \",\".")]
    InvalidDelimiter(String),

    /// Report could not be written.
    #[error("Cannot write report to {}: {source}", .path.display())]
    Report {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
