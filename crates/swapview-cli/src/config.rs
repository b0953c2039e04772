//! CLI configuration.
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file provides.
//!
//! ```toml
//! data_dir = "data/2024q4"
//! delimiter = "\t"
//! report_dir = "reports"
//!
//! [files]
//! swaps = "data/2024q4/swaps_fixed.tsv"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swapview_ext_file::FilingPaths;

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "swapview.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Directory holding the filing tables
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Field delimiter of the tables
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Directory JSON reports are written to
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Per-table file overrides
    #[serde(default)]
    pub files: TableFiles,
}

/// Explicit table locations; unset entries use the conventional names in
/// `data_dir`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableFiles {
    /// Holdings table
    pub holdings: Option<PathBuf>,
    /// Fund info table
    pub fund_info: Option<PathBuf>,
    /// Swap table
    pub swaps: Option<PathBuf>,
    /// Counterparty table
    pub counterparties: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_report_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            delimiter: default_delimiter(),
            report_dir: default_report_dir(),
            files: TableFiles::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CliResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, `swapview.toml` in the
    /// working directory is used if present, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Returns the delimiter as a single byte.
    pub fn delimiter_byte(&self) -> CliResult<u8> {
        let unescaped = match self.delimiter.as_str() {
            "\\t" | "tab" => "\t",
            other => other,
        };
        match unescaped.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(CliError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    /// Returns the table locations, applying per-file overrides.
    pub fn filing_paths(&self) -> FilingPaths {
        let mut paths = FilingPaths::in_dir(&self.data_dir);
        if let Some(p) = &self.files.holdings {
            paths.holdings = p.clone();
        }
        if let Some(p) = &self.files.fund_info {
            paths.fund_info = p.clone();
        }
        if let Some(p) = &self.files.swaps {
            paths.swaps = p.clone();
        }
        if let Some(p) = &self.files.counterparties {
            paths.counterparties = p.clone();
        }
        paths
    }
}
