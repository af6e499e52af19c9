// Rust guideline compliant 2026-10-16

//! Command implementations for the Scholar CLI.
//!
//! Each command reads from a loaded [`crate::Library`] and returns the
//! rendered output so callers decide where it goes.

pub mod citations;
pub mod datasets;
pub mod publications;
