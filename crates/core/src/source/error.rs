//! Data source error types.

use thiserror::Error;

/// Errors raised while producing input rows.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A row failed validation and was rejected.
    #[error("invalid row {index}: {reason}")]
    InvalidRow {
        /// Zero-based position of the row.
        index: usize,
        /// Why the row was rejected.
        reason: String,
    },
}
