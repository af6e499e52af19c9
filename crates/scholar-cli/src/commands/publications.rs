// Rust guideline compliant 2026-10-16

//! Publication lookup commands: `show`, `search`, `author`, `venues`.

use crate::{Library, OutputFormatter};
use anyhow::Result;
use scholar_core::Error;

/// Shows a single publication by its exact ID.
///
/// # Errors
///
/// Returns an error if no publication has the given ID.
pub fn show(library: &Library, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let publication = library
        .publications
        .get(id)
        .ok_or_else(|| Error::NotFound(format!("Publication {} not found", id)))?;
    Ok(formatter.format_publication(publication))
}

/// Lists publications whose title, abstract, or keywords contain `term`.
pub fn search(library: &Library, term: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let matches = library.publications.search_by_keyword(term);
    tracing::debug!(term, matches = matches.len(), "keyword search");
    Ok(formatter.format_publications(&matches))
}

/// Lists publications with a matching author.
pub fn author(library: &Library, name: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let matches = library.publications.filter_by_author(name);
    Ok(formatter.format_publications(&matches))
}

/// Shows how many publications appeared at each venue.
pub fn venues(library: &Library, formatter: &dyn OutputFormatter) -> Result<String> {
    Ok(formatter.format_venues(&library.publications.get_venues()))
}
