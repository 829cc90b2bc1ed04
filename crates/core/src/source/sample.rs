//! Demonstration fixtures.

use rust_decimal::Decimal;

use super::{BudgetSource, LedgerSource, SourceError};
use crate::statement::TransactionRow;
use crate::variance::BudgetRow;

/// Period of the sample transactions.
pub const SAMPLE_PERIOD: &str = "2023-Q1";

/// Built-in sample ledger and budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl LedgerSource for SampleData {
    fn transactions(&self) -> Result<Vec<TransactionRow>, SourceError> {
        let rows = [
            ("Revenue", "Product Sales", 500_000),
            ("Revenue", "Service Revenue", 120_000),
            ("COGS", "Material Cost", -200_000),
            ("COGS", "Labor Cost", -80_000),
            ("OpEx", "Marketing", -45_000),
            ("OpEx", "R&D", -60_000),
            ("OpEx", "G&A", -30_000),
            ("Tax", "Income Tax", -40_000),
        ];

        Ok(rows
            .into_iter()
            .map(|(account, sub_account, amount)| {
                TransactionRow::new(account, sub_account, Decimal::from(amount), SAMPLE_PERIOD)
            })
            .collect())
    }
}

impl BudgetSource for SampleData {
    fn budget_rows(&self) -> Result<Vec<BudgetRow>, SourceError> {
        let rows = [
            ("Sales", 120_000, 100_000),
            ("Marketing", 45_000, 50_000),
            ("Engineering", 150_000, 140_000),
            ("HR", 20_000, 20_000),
            ("Finance", 25_000, 22_000),
        ];

        Ok(rows
            .into_iter()
            .map(|(department, actual, budget)| {
                BudgetRow::new(department, Decimal::from(actual), Decimal::from(budget))
            })
            .collect())
    }
}
