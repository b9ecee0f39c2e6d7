//! Error types for sesscan.
//!
//! Only a missing scan root is fatal; every other failure is recovered where
//! it occurs so one unreadable file can never abort a whole scan.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist. Fatal; the process exits 2.
    #[error("Root not found: {0}")]
    RootNotFound(PathBuf),

    /// A file could not be read. The file is skipped for the current pattern.
    #[error("Failed to read file: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File metadata could not be stat'ed during eligibility checking.
    /// The file is treated as ineligible.
    #[error("Failed to stat file: {path}")]
    StatError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be written. The run still succeeds because
    /// the report already reached stdout.
    #[error("Failed to write report: {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;
