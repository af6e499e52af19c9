// Rust guideline compliant 2026-10-16

//! Unit tests for output formatting module.

use scholar_cli::create_formatter;
use scholar_core::{DatasetSummary, OutputFormat, Publication};
use std::collections::BTreeMap;

fn create_test_publication() -> Publication {
    Publication {
        id: "pub-a1b2c3d4e5".to_string(),
        title: "Test Publication".to_string(),
        authors: vec!["Ada".to_string(), "Grace".to_string()],
        year: 2025,
        venue: "NeurIPS".to_string(),
        doi: Some("10.1000/xyz".to_string()),
        abstract_text: "An abstract.".to_string(),
        keywords: vec!["testing".to_string()],
        created_at: "2025-01-01T00:00:00+00:00".to_string(),
    }
}

#[test]
fn test_json_formatter_single_publication() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_publication(&create_test_publication());

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["id"], "pub-a1b2c3d4e5");
    assert_eq!(value["abstract"], "An abstract.");
    assert_eq!(value["doi"], "10.1000/xyz");
}

#[test]
fn test_json_formatter_publication_list() {
    let first = create_test_publication();
    let mut second = create_test_publication();
    second.id = "pub-f6a7b8c9d0".to_string();

    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_publications(&[&first, &second]);

    assert!(output.contains("pub-a1b2c3d4e5"));
    assert!(output.contains("pub-f6a7b8c9d0"));
    assert!(output.contains("\"total\": 2"));
}

#[test]
fn test_json_formatter_error() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_error("Test error message");

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["error"], "Test error message");
}

#[test]
fn test_json_formatter_chain() {
    let formatter = create_formatter(OutputFormat::Json);
    let chain = vec!["a".to_string(), "b".to_string()];
    let output = formatter.format_chain("a", "b", Some(&chain));

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["chain"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_table_formatter_single_publication() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_publication(&create_test_publication());

    assert!(output.contains("Title:    Test Publication"));
    assert!(output.contains("Authors:  Ada, Grace"));
    assert!(output.contains("DOI:      10.1000/xyz"));
    assert!(output.contains("An abstract."));
}

#[test]
fn test_table_formatter_empty_lists() {
    let formatter = create_formatter(OutputFormat::Table);

    assert_eq!(formatter.format_publications(&[]), "No publications found.");
    assert_eq!(formatter.format_impact(&[]), "No citations recorded.");
    assert_eq!(formatter.format_datasets(&[]), "No datasets found.");
    assert_eq!(formatter.format_venues(&BTreeMap::new()), "No publications found.");
}

#[test]
fn test_table_formatter_impact_rows() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_impact(&[("pub-x".to_string(), 3), ("pub-y".to_string(), 1)]);

    assert!(output.contains("Citations"));
    let x = output.find("pub-x").unwrap();
    let y = output.find("pub-y").unwrap();
    assert!(x < y, "rows must keep impact order");
}

#[test]
fn test_table_formatter_missing_chain() {
    let formatter = create_formatter(OutputFormat::Table);
    assert_eq!(
        formatter.format_chain("a", "z", None),
        "No citation chain from a to z."
    );
}

#[test]
fn test_table_formatter_datasets() {
    let formatter = create_formatter(OutputFormat::Table);
    let summary = DatasetSummary {
        dataset_id: "ds-1".to_string(),
        name: "Corpus".to_string(),
        format: "csv".to_string(),
        size_bytes: 42,
        version: "1.0.0".to_string(),
        tags: vec!["nlp".to_string()],
        linked_publications: vec![],
    };
    let output = formatter.format_datasets(&[summary]);

    assert!(output.contains("Corpus"));
    assert!(output.contains("42"));
}

#[test]
fn test_table_formatter_error() {
    let formatter = create_formatter(OutputFormat::Table);
    assert_eq!(formatter.format_error("boom"), "Error: boom");
}
