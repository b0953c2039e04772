//! Loader error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading filing tables from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {reason}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// A row did not match the expected schema.
    #[error(
        "{}{}: {reason}",
        .path.display(),
        .line.map(|l| format!(" line {l}")).unwrap_or_default()
    )]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// 1-based line of the offending record, when known.
        line: Option<u64>,
        /// What was wrong with the record.
        reason: String,
    },
}

impl LoadError {
    /// Create an IO error for a path.
    pub fn io(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a parse error for a record of `path`.
    pub fn parse(path: impl AsRef<Path>, line: Option<u64>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    /// Classifies a csv error raised while reading `path`.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        match err.kind() {
            csv::ErrorKind::Io(io) => Self::io(path, io.to_string()),
            _ => Self::Parse {
                path: path.to_path_buf(),
                line,
                reason: err.to_string(),
            },
        }
    }

    /// Returns the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
