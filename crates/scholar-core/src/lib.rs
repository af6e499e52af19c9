// Rust guideline compliant 2026-10-16

//! Scholar Core Library
//!
//! This crate provides the in-memory building blocks of the Scholar research-metadata toolkit:
//! - Citation graph (impact counts, shortest citation chains)
//! - Publication manager (keyed storage, keyword and author search)
//! - Dataset catalog (registration, publication links, export)
//! - Hash ID generation and validation
//! - Configuration and error types

pub mod citations;
pub mod config;
pub mod datasets;
pub mod error;
pub mod identity;
pub mod publication;

pub use citations::{CitationEdge, CitationGraph, DEFAULT_MAX_DEPTH};
pub use config::{Config, OutputFormat};
pub use datasets::{Dataset, DatasetCatalog, DatasetSummary, NewDataset};
pub use error::{Error, Result};
pub use publication::{NewPublication, Publication, PublicationManager};
