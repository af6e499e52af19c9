// Rust guideline compliant 2026-10-16

//! Dataset commands: `datasets`, `export`, `stats`.

use crate::{Library, OutputFormatter};
use anyhow::{Context, Result};
use scholar_core::DatasetSummary;

/// Lists datasets, optionally only those carrying `tag`.
pub fn list(library: &Library, tag: Option<&str>, formatter: &dyn OutputFormatter) -> Result<String> {
    let summaries: Vec<DatasetSummary> = match tag {
        Some(tag) => library
            .datasets
            .search_by_tag(tag)
            .into_iter()
            .map(DatasetSummary::from)
            .collect(),
        None => library.datasets.export(),
    };
    Ok(formatter.format_datasets(&summaries))
}

/// Exports the dataset catalog as a JSON array, whatever the output format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export(library: &Library) -> Result<String> {
    serde_json::to_string_pretty(&library.datasets.export())
        .context("Failed to serialize dataset export")
}

/// Shows record counts and the total dataset size.
pub fn stats(library: &Library, formatter: &dyn OutputFormatter) -> Result<String> {
    let rows = [
        ("publications", library.publications.count() as u64),
        ("citations", library.citations.edge_count() as u64),
        ("datasets", library.datasets.count() as u64),
        ("dataset_bytes", library.datasets.get_total_size()),
    ];
    Ok(formatter.format_summary(&rows))
}
