// Rust guideline compliant 2026-10-16

//! Output formatting module for the Scholar CLI.
//!
//! This module provides functionality for formatting publications, citation
//! queries, and datasets as JSON or human-readable tables.

use scholar_core::{DatasetSummary, OutputFormat, Publication};
use serde_json::json;
use std::collections::BTreeMap;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Scholar data in different output formats.
pub trait OutputFormatter {
    /// Formats a single publication for display.
    fn format_publication(&self, publication: &Publication) -> String;

    /// Formats a list of publications for display.
    fn format_publications(&self, publications: &[&Publication]) -> String;

    /// Formats a list of publication IDs related to `pub_id`.
    ///
    /// # Arguments
    /// * `relation` - What the IDs are (`references` or `citers`)
    /// * `pub_id` - The publication queried
    /// * `ids` - Related IDs in citation order
    fn format_related(&self, relation: &str, pub_id: &str, ids: &[String]) -> String;

    /// Formats citation counts, most cited first.
    fn format_impact(&self, impact: &[(String, usize)]) -> String;

    /// Formats the outcome of a chain search.
    fn format_chain(&self, start: &str, end: &str, chain: Option<&[String]>) -> String;

    /// Formats a venue frequency map.
    fn format_venues(&self, venues: &BTreeMap<String, usize>) -> String;

    /// Formats dataset summaries.
    fn format_datasets(&self, datasets: &[DatasetSummary]) -> String;

    /// Formats named totals, such as record counts.
    fn format_summary(&self, rows: &[(&str, u64)]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

fn to_pretty(value: serde_json::Value) -> String {
    serde_json::to_string_pretty(&value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

impl OutputFormatter for JsonFormatter {
    fn format_publication(&self, publication: &Publication) -> String {
        to_pretty(json!(publication))
    }

    fn format_publications(&self, publications: &[&Publication]) -> String {
        to_pretty(json!({
            "publications": publications,
            "total": publications.len(),
        }))
    }

    fn format_related(&self, relation: &str, pub_id: &str, ids: &[String]) -> String {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), json!(pub_id));
        object.insert(relation.to_string(), json!(ids));
        object.insert("total".to_string(), json!(ids.len()));
        to_pretty(serde_json::Value::Object(object))
    }

    fn format_impact(&self, impact: &[(String, usize)]) -> String {
        let entries: Vec<serde_json::Value> = impact
            .iter()
            .map(|(id, citations)| json!({ "id": id, "citations": citations }))
            .collect();
        to_pretty(json!({ "impact": entries }))
    }

    fn format_chain(&self, start: &str, end: &str, chain: Option<&[String]>) -> String {
        to_pretty(json!({
            "start": start,
            "end": end,
            "found": chain.is_some(),
            "chain": chain,
        }))
    }

    fn format_venues(&self, venues: &BTreeMap<String, usize>) -> String {
        to_pretty(json!({ "venues": venues }))
    }

    fn format_datasets(&self, datasets: &[DatasetSummary]) -> String {
        to_pretty(json!({
            "datasets": datasets,
            "total": datasets.len(),
        }))
    }

    fn format_summary(&self, rows: &[(&str, u64)]) -> String {
        let object: serde_json::Map<String, serde_json::Value> = rows
            .iter()
            .map(|(name, value)| (name.to_string(), json!(value)))
            .collect();
        to_pretty(serde_json::Value::Object(object))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables.
pub struct TableFormatter;

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

impl OutputFormatter for TableFormatter {
    fn format_publication(&self, publication: &Publication) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:       {}\n", publication.id));
        output.push_str(&format!("Title:    {}\n", publication.title));
        output.push_str(&format!("Authors:  {}\n", publication.authors.join(", ")));
        output.push_str(&format!("Year:     {}\n", publication.year));
        output.push_str(&format!("Venue:    {}\n", publication.venue));

        if let Some(doi) = &publication.doi {
            output.push_str(&format!("DOI:      {}\n", doi));
        }

        if !publication.keywords.is_empty() {
            output.push_str(&format!("Keywords: {}\n", publication.keywords.join(", ")));
        }

        if !publication.abstract_text.is_empty() {
            output.push_str(&format!("\n{}\n", publication.abstract_text));
        }

        output
    }

    fn format_publications(&self, publications: &[&Publication]) -> String {
        if publications.is_empty() {
            return "No publications found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Year", "Venue", "Title", "Authors"]);

        for publication in publications {
            builder.push_record(vec![
                publication.id.clone(),
                publication.year.to_string(),
                publication.venue.clone(),
                publication.title.clone(),
                publication.authors.join(", "),
            ]);
        }

        render(builder)
    }

    fn format_related(&self, relation: &str, pub_id: &str, ids: &[String]) -> String {
        if ids.is_empty() {
            return format!("No {} for {}.", relation, pub_id);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#".to_string(), relation.to_string()]);
        for (i, id) in ids.iter().enumerate() {
            builder.push_record(vec![(i + 1).to_string(), id.clone()]);
        }

        render(builder)
    }

    fn format_impact(&self, impact: &[(String, usize)]) -> String {
        if impact.is_empty() {
            return "No citations recorded.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Citations"]);
        for (id, citations) in impact {
            builder.push_record(vec![id.clone(), citations.to_string()]);
        }

        render(builder)
    }

    fn format_chain(&self, start: &str, end: &str, chain: Option<&[String]>) -> String {
        match chain {
            Some(chain) => format!("{} ({} hops)", chain.join(" -> "), chain.len() - 1),
            None => format!("No citation chain from {} to {}.", start, end),
        }
    }

    fn format_venues(&self, venues: &BTreeMap<String, usize>) -> String {
        if venues.is_empty() {
            return "No publications found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Venue", "Publications"]);
        for (venue, count) in venues {
            builder.push_record(vec![venue.clone(), count.to_string()]);
        }

        render(builder)
    }

    fn format_datasets(&self, datasets: &[DatasetSummary]) -> String {
        if datasets.is_empty() {
            return "No datasets found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Format", "Size", "Version", "Tags", "Publications"]);
        for dataset in datasets {
            builder.push_record(vec![
                dataset.dataset_id.clone(),
                dataset.name.clone(),
                dataset.format.clone(),
                dataset.size_bytes.to_string(),
                dataset.version.clone(),
                dataset.tags.join(", "),
                dataset.linked_publications.len().to_string(),
            ]);
        }

        render(builder)
    }

    fn format_summary(&self, rows: &[(&str, u64)]) -> String {
        let mut builder = Builder::default();
        for (name, value) in rows {
            builder.push_record(vec![name.to_string(), value.to_string()]);
        }

        render(builder)
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
