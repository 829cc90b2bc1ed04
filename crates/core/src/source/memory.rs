//! Caller-supplied rows.

use super::{BudgetSource, LedgerSource, SourceError};
use crate::statement::TransactionRow;
use crate::variance::BudgetRow;

/// Validating source over rows already held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<TransactionRow>,
    budget_rows: Vec<BudgetRow>,
}

impl InMemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transaction rows.
    #[must_use]
    pub fn with_transactions(mut self, rows: Vec<TransactionRow>) -> Self {
        self.transactions = rows;
        self
    }

    /// Sets the budget rows.
    #[must_use]
    pub fn with_budget_rows(mut self, rows: Vec<BudgetRow>) -> Self {
        self.budget_rows = rows;
        self
    }
}

impl LedgerSource for InMemorySource {
    fn transactions(&self) -> Result<Vec<TransactionRow>, SourceError> {
        for (index, row) in self.transactions.iter().enumerate() {
            if row.sub_account.trim().is_empty() {
                return Err(invalid(index, "sub-account is empty"));
            }
            if row.period.trim().is_empty() {
                return Err(invalid(index, "period is empty"));
            }
        }
        Ok(self.transactions.clone())
    }
}

impl BudgetSource for InMemorySource {
    fn budget_rows(&self) -> Result<Vec<BudgetRow>, SourceError> {
        for (index, row) in self.budget_rows.iter().enumerate() {
            if row.department.trim().is_empty() {
                return Err(invalid(index, "department is empty"));
            }
        }
        Ok(self.budget_rows.clone())
    }
}

fn invalid(index: usize, reason: &str) -> SourceError {
    SourceError::InvalidRow {
        index,
        reason: reason.to_string(),
    }
}
