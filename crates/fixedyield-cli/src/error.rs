//! CLI error types.

use std::path::PathBuf;

use fixedyield_bonds::BondError;
use fixedyield_core::CoreError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A universe row could not be read or turned into a bond.
    #[error("{path}, record {record}: {reason}")]
    Universe {
        /// Universe file.
        path: PathBuf,
        /// 1-based data record number.
        record: usize,
        /// What went wrong.
        reason: String,
    },

    /// The universe file could not be opened or parsed as CSV.
    #[error("Cannot read universe {path}: {source}")]
    UniverseFile {
        /// Universe file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// No bond matched a ticker filter.
    #[error("No bond with ticker {0}")]
    UnknownTicker(String),

    /// Calendar or date error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Bond error.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
