// Rust guideline compliant 2026-10-16

//! Catalog document loading.
//!
//! A catalog document is a single JSON object holding publications, citations,
//! and datasets. Loading it fills the in-memory stores; nothing is written back.

use anyhow::{Context, Result};
use scholar_core::{
    CitationEdge, CitationGraph, Config, Dataset, DatasetCatalog, Publication, PublicationManager,
};
use serde::Deserialize;
use std::path::Path;

/// On-disk shape of a catalog document. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub citations: Vec<CitationEdge>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// The three in-memory stores of a session.
#[derive(Debug)]
pub struct Library {
    pub publications: PublicationManager,
    pub citations: CitationGraph,
    pub datasets: DatasetCatalog,
}

impl Library {
    /// Creates empty stores configured from `config`.
    pub fn empty(config: &Config) -> Self {
        Self {
            publications: PublicationManager::from_config(config),
            citations: CitationGraph::new(),
            datasets: DatasetCatalog::from_config(config),
        }
    }

    /// Reads and loads a catalog document from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains a publication or dataset with an unusable ID.
    pub fn load(path: &Path, config: &Config) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let document: CatalogDocument = serde_json::from_str(&content)
            .with_context(|| format!("Invalid catalog document {}", path.display()))?;
        Self::from_document(document, config)
    }

    /// Loads an already parsed catalog document.
    ///
    /// Citations are added in document order. Citation IDs are not required to
    /// match a publication in the document.
    ///
    /// # Errors
    ///
    /// Returns an error if a publication or dataset has an unusable ID.
    pub fn from_document(document: CatalogDocument, config: &Config) -> Result<Self> {
        let mut library = Self::empty(config);

        for publication in document.publications {
            let id = publication.id.clone();
            library
                .publications
                .insert(publication)
                .with_context(|| format!("Rejected publication {:?}", id))?;
        }

        for edge in document.citations {
            library
                .citations
                .add_citation_with_context(edge.citing_id, edge.cited_id, edge.context);
        }

        for dataset in document.datasets {
            let id = dataset.id.clone();
            library
                .datasets
                .insert(dataset)
                .with_context(|| format!("Rejected dataset {:?}", id))?;
        }

        tracing::info!(
            publications = library.publications.count(),
            citations = library.citations.edge_count(),
            datasets = library.datasets.count(),
            "loaded catalog"
        );

        Ok(library)
    }
}
