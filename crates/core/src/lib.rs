//! Core report logic for Tally.
//!
//! This crate contains pure business logic with no I/O. Every computation is a
//! synchronous function from in-memory rows to value objects and text lines.
//!
//! # Modules
//!
//! - `statement` - Income statement roll-up and rendering
//! - `variance` - Budget-vs-actual variance analysis and rendering
//! - `source` - Data providers and demonstration fixtures

pub mod source;
pub mod statement;
pub mod variance;
