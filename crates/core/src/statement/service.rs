//! Income statement roll-up.

use rust_decimal::Decimal;
use tracing::debug;

use super::types::{LineKind, StatementLine, StatementStructure, StructureEntry, TransactionRow};

/// Rolls transaction rows up into statement lines.
pub struct StatementBuilder;

impl StatementBuilder {
    /// Builds the statement lines for `structure` over all `rows`.
    ///
    /// Section headers carry the sum of their sub-accounts. Subtotals carry the
    /// running sum of every section above them, so with costs stored negative
    /// Gross Profit = Revenue + COGS, Operating Income = Gross Profit + OpEx and
    /// Net Income = Operating Income + Taxes. The last subtotal is the grand
    /// total. Sub-accounts without rows contribute zero. Sums saturate at the
    /// `Decimal` range instead of overflowing.
    #[must_use]
    pub fn build(rows: &[TransactionRow], structure: &StatementStructure) -> Vec<StatementLine> {
        let entries = structure.entries();
        let grand_total_index = entries
            .iter()
            .rposition(|entry| matches!(entry, StructureEntry::Subtotal { .. }));

        for sub_account in structure.all_sub_accounts() {
            if !rows.iter().any(|row| row.sub_account == sub_account) {
                debug!(sub_account, "No transactions for sub-account, contributing zero");
            }
        }

        let mut running = Decimal::ZERO;
        let mut lines = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            match entry {
                StructureEntry::Section(section) => {
                    let total = Self::total(rows, &section.sub_accounts);
                    running = running.saturating_add(total);

                    if section.optional && !Self::has_rows(rows, &section.sub_accounts) {
                        debug!(section = %section.label, "Skipping optional section without rows");
                        continue;
                    }

                    lines.push(StatementLine::new(&section.label, total, LineKind::Header));

                    if section.details {
                        for sub_account in &section.sub_accounts {
                            let amount = Self::total(rows, std::slice::from_ref(sub_account));
                            lines.push(StatementLine::new(
                                format!("  {sub_account}"),
                                amount,
                                LineKind::Detail,
                            ));
                        }
                    }
                }
                StructureEntry::Subtotal { label } => {
                    let kind = if Some(index) == grand_total_index {
                        LineKind::GrandTotal
                    } else {
                        LineKind::Total
                    };
                    lines.push(StatementLine::new(label, running, kind));
                }
            }
        }

        debug!(rows = rows.len(), lines = lines.len(), "Statement built");
        lines
    }

    /// Builds the statement from the rows of a single period only.
    #[must_use]
    pub fn build_for_period(
        rows: &[TransactionRow],
        structure: &StatementStructure,
        period: &str,
    ) -> Vec<StatementLine> {
        let filtered: Vec<TransactionRow> = rows
            .iter()
            .filter(|row| row.period == period)
            .cloned()
            .collect();
        Self::build(&filtered, structure)
    }

    /// Distinct periods in first-seen order.
    #[must_use]
    pub fn periods(rows: &[TransactionRow]) -> Vec<String> {
        let mut periods: Vec<String> = Vec::new();
        for row in rows {
            if !periods.contains(&row.period) {
                periods.push(row.period.clone());
            }
        }
        periods
    }

    /// Sum of amounts for rows whose sub-account is in `sub_accounts`.
    #[must_use]
    pub fn total(rows: &[TransactionRow], sub_accounts: &[String]) -> Decimal {
        rows.iter()
            .filter(|row| sub_accounts.contains(&row.sub_account))
            .fold(Decimal::ZERO, |acc, row| acc.saturating_add(row.amount))
    }

    fn has_rows(rows: &[TransactionRow], sub_accounts: &[String]) -> bool {
        rows.iter()
            .any(|row| sub_accounts.contains(&row.sub_account))
    }
}
