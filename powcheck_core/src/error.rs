//! Error types for powcheck.

use std::path::PathBuf;

/// Main error type for powcheck.
///
/// Only run-level failures are represented here. Problems with an individual
/// file are folded into its [`Verdict`](crate::types::Verdict) instead.
#[derive(thiserror::Error, Debug)]
pub enum PowCheckError {
    /// The root folder does not exist or is not a directory.
    #[error("{} is not a valid directory", .0.display())]
    InvalidRoot(PathBuf),

    /// Configuration value rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The exponent's power of two cannot be materialised in memory.
    #[error("Exponent {0} is too large to expand")]
    ExponentTooLarge(String),

    /// The report could not be written.
    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        /// Destination of the report
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result with PowCheckError.
pub type Result<T> = std::result::Result<T, PowCheckError>;
