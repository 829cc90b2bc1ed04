//! Data providers feeding the report pipelines.
//!
//! The statement and variance computations never fabricate their own input.
//! Rows come from a [`LedgerSource`] or [`BudgetSource`]; [`SampleData`]
//! carries the demonstration fixtures and [`InMemorySource`] wraps rows a
//! caller already holds.

mod error;
mod memory;
mod sample;

pub use error::SourceError;
pub use memory::InMemorySource;
pub use sample::{SAMPLE_PERIOD, SampleData};

use crate::statement::TransactionRow;
use crate::variance::BudgetRow;

/// Supplies transaction rows for the income statement.
pub trait LedgerSource {
    /// Returns every transaction row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the rows cannot be produced or fail validation.
    fn transactions(&self) -> Result<Vec<TransactionRow>, SourceError>;
}

/// Supplies actual-vs-budget rows for the variance report.
pub trait BudgetSource {
    /// Returns every budget row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the rows cannot be produced or fail validation.
    fn budget_rows(&self) -> Result<Vec<BudgetRow>, SourceError>;
}
