//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Money and currency formatting with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, OutputFormat, ReportConfig, VarianceConfig};
pub use error::{AppError, AppResult};
pub use types::{Currency, Money};
