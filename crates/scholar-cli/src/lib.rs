// Rust guideline compliant 2026-10-16

//! Scholar CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod catalog;
pub mod commands;
pub mod output;

pub use catalog::{CatalogDocument, Library};
pub use output::{create_formatter, OutputFormatter};
