//! Budget variance analysis.
//!
//! Compares actual against budget per department, computes absolute and
//! percentage variance, flags each row with a Green/Yellow/Red status band and
//! renders a fixed-width table.

pub mod render;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use render::{NOT_AVAILABLE, VarianceLayout, format_percent, render};
pub use service::VarianceAnalyzer;
pub use types::{BudgetRow, DepartmentVariance, Polarity, Status, Thresholds, VarianceSummary};
