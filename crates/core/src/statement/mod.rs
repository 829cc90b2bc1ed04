//! Income statement generation.
//!
//! Rolls transaction rows up into a hierarchical statement
//! (Revenue → COGS → Gross Profit → OpEx → Operating Income → Taxes →
//! Net Income) and renders it as aligned text.

pub mod render;
pub mod service;
pub mod types;


pub use render::{StatementLayout, render, statement_title};
pub use service::StatementBuilder;
pub use types::{LineKind, Section, StatementLine, StatementStructure, StructureEntry, TransactionRow};
