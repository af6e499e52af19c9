// Rust guideline compliant 2026-10-16

//! Citation graph commands: `refs`, `citers`, `impact`, `chain`.
//!
//! IDs are passed to the graph unchecked; an ID the catalog does not know
//! simply has no citations.

use crate::{Library, OutputFormatter};
use anyhow::Result;

/// Lists the publications `id` cites.
pub fn references(library: &Library, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let ids = library.citations.get_references(id);
    Ok(formatter.format_related("references", id, &ids))
}

/// Lists the publications citing `id`.
pub fn citers(library: &Library, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let ids = library.citations.get_citers(id);
    Ok(formatter.format_related("citers", id, &ids))
}

/// Ranks cited publications by citation count.
///
/// # Arguments
///
/// * `limit` - Keep only the first `limit` entries
pub fn impact(
    library: &Library,
    limit: Option<usize>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let mut impact = library.citations.compute_impact();
    if let Some(limit) = limit {
        impact.truncate(limit);
    }
    Ok(formatter.format_impact(&impact))
}

/// Finds the shortest citation chain from `start` to `end`.
///
/// A missing chain is reported in the output, not as an error.
pub fn chain(
    library: &Library,
    start: &str,
    end: &str,
    max_depth: usize,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let chain = library.citations.find_chain_within(start, end, max_depth);
    Ok(formatter.format_chain(start, end, chain.as_deref()))
}
