//! Error types for hwmgr
//!
//! Ledger operations themselves never fail. Errors only come from the
//! edges: reading seed datasets, parsing actions, and loading config.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hwmgr operations
pub type HwResult<T> = Result<T, HwError>;

/// Main error type for hwmgr operations
#[derive(Error, Debug)]
pub enum HwError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file could not be parsed
    #[error("invalid dataset in {file}: {message}")]
    InvalidDataset { file: PathBuf, message: String },

    /// Dataset file extension is not one we can read
    #[error("unsupported dataset format '{extension}' for {file} (expected .toml or .json)")]
    UnsupportedDatasetFormat { file: PathBuf, extension: String },

    /// Two hardware sets or two projects share an id
    #[error("duplicate {kind} id '{id}' in dataset")]
    DuplicateId { kind: &'static str, id: String },

    /// Dataset file does not exist
    #[error("dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// Action text could not be parsed
    #[error("invalid action on line {line}: {message}")]
    InvalidAction { line: usize, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}
