//! Income statement data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction-level row as supplied by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Top-level account (e.g. "Revenue", "COGS").
    pub account: String,
    /// Sub-account the statement structure aggregates on.
    pub sub_account: String,
    /// Signed amount. Costs and taxes are negative, revenue positive.
    pub amount: Decimal,
    /// Reporting period label (e.g. "2023-Q1").
    pub period: String,
}

impl TransactionRow {
    /// Creates a new transaction row.
    #[must_use]
    pub fn new(
        account: impl Into<String>,
        sub_account: impl Into<String>,
        amount: Decimal,
        period: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            sub_account: sub_account.into(),
            amount,
            period: period.into(),
        }
    }
}

/// Structural role of a rendered statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Section total (e.g. Revenue).
    Header,
    /// Single sub-account nested under a header.
    Detail,
    /// Intermediate computed subtotal (e.g. Gross Profit).
    Total,
    /// Final computed subtotal (e.g. Net Income).
    GrandTotal,
}

/// One line of an income statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Display label. Detail labels carry their indentation.
    pub label: String,
    /// Signed amount.
    pub amount: Decimal,
    /// Line kind.
    pub kind: LineKind,
}

impl StatementLine {
    /// Creates a new statement line.
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal, kind: LineKind) -> Self {
        Self {
            label: label.into(),
            amount,
            kind,
        }
    }
}

/// A labelled group of sub-accounts that rolls up into one header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header label.
    pub label: String,
    /// Aggregated sub-accounts, unique and in display order.
    pub sub_accounts: Vec<String>,
    /// Emit one detail line per sub-account after the header.
    pub details: bool,
    /// Omit the header when no row matches any sub-account.
    pub optional: bool,
}

impl Section {
    /// Creates a section. Duplicate sub-account names are dropped.
    #[must_use]
    pub fn new<I, S>(label: impl Into<String>, sub_accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for sub in sub_accounts {
            let sub = sub.into();
            if !unique.contains(&sub) {
                unique.push(sub);
            }
        }

        Self {
            label: label.into(),
            sub_accounts: unique,
            details: false,
            optional: false,
        }
    }

    /// Shows each sub-account as a detail line.
    #[must_use]
    pub fn with_details(mut self) -> Self {
        self.details = true;
        self
    }

    /// Hides the section header when the data has no matching rows.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// An entry of a statement structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureEntry {
    /// Direct aggregation of sub-accounts.
    Section(Section),
    /// Computed running total of every section above it.
    Subtotal {
        /// Subtotal label.
        label: String,
    },
}

impl StructureEntry {
    /// Returns the entry label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Section(section) => &section.label,
            Self::Subtotal { label } => label,
        }
    }
}

/// Ordered layout of an income statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementStructure {
    entries: Vec<StructureEntry>,
}

impl StatementStructure {
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The template income statement: Revenue, COGS, Gross Profit, OpEx,
    /// Operating Income, Taxes and Net Income.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .section(Section::new("Revenue", ["Product Sales", "Service Revenue"]).with_details())
            .section(Section::new("Cost of Goods Sold", ["Material Cost", "Labor Cost"]))
            .subtotal("Gross Profit")
            .section(Section::new("Operating Expenses", ["Marketing", "R&D", "G&A"]))
            .subtotal("Operating Income")
            .section(Section::new("Taxes", ["Income Tax"]).optional())
            .subtotal("Net Income")
    }

    /// Appends a section.
    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.entries.push(StructureEntry::Section(section));
        self
    }

    /// Appends a computed subtotal.
    #[must_use]
    pub fn subtotal(mut self, label: impl Into<String>) -> Self {
        self.entries.push(StructureEntry::Subtotal {
            label: label.into(),
        });
        self
    }

    /// Entries in statement order.
    #[must_use]
    pub fn entries(&self) -> &[StructureEntry] {
        &self.entries
    }

    /// Sub-accounts aggregated under `label`, or `None` for subtotals and
    /// unknown labels.
    #[must_use]
    pub fn sub_accounts(&self, label: &str) -> Option<&[String]> {
        self.sections()
            .find(|section| section.label == label)
            .map(|section| section.sub_accounts.as_slice())
    }

    /// Every sub-account referenced by the structure, in order.
    pub fn all_sub_accounts(&self) -> impl Iterator<Item = &str> {
        self.sections()
            .flat_map(|section| section.sub_accounts.iter().map(String::as_str))
    }

    fn sections(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter().filter_map(|entry| match entry {
            StructureEntry::Section(section) => Some(section),
            StructureEntry::Subtotal { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_drops_duplicate_sub_accounts() {
        let section = Section::new("Revenue", ["A", "B", "A"]);
        assert_eq!(section.sub_accounts, vec!["A", "B"]);
        assert!(!section.details);
        assert!(!section.optional);
    }

    #[test]
    fn test_standard_structure_order() {
        let structure = StatementStructure::standard();
        let labels: Vec<&str> = structure.entries().iter().map(StructureEntry::label).collect();
        assert_eq!(
            labels,
            vec![
                "Revenue",
                "Cost of Goods Sold",
                "Gross Profit",
                "Operating Expenses",
                "Operating Income",
                "Taxes",
                "Net Income",
            ]
        );
    }

    #[test]
    fn test_sub_accounts_lookup() {
        let structure = StatementStructure::standard();
        assert_eq!(
            structure.sub_accounts("Operating Expenses"),
            Some(["Marketing".to_string(), "R&D".to_string(), "G&A".to_string()].as_slice())
        );
        assert_eq!(structure.sub_accounts("Gross Profit"), None);
        assert_eq!(structure.sub_accounts("Unknown"), None);
        assert_eq!(structure.all_sub_accounts().count(), 8);
    }
}
