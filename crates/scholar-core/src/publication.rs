// Rust guideline compliant 2026-10-16

//! Publication metadata management.
//!
//! This module provides the PublicationManager for creating, searching, and
//! organizing academic publications with structured metadata.

use crate::identity::{self, PUBLICATION_PREFIX};
use crate::{Config, Result};
use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Represents a single academic publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique identifier (format: pub-XXXXXXXXXX for generated IDs).
    pub id: String,
    /// Publication title.
    pub title: String,
    /// Author names.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year.
    pub year: i32,
    /// Journal or conference name.
    pub venue: String,
    /// Digital Object Identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Publication abstract.
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    /// Subject keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Input for [`PublicationManager::add`].
#[derive(Debug, Clone, Default)]
pub struct NewPublication {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub venue: String,
    pub doi: Option<String>,
    pub abstract_text: String,
    pub keywords: Vec<String>,
}

impl NewPublication {
    /// Creates an input with the required fields set.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        year: i32,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors,
            year,
            venue: venue.into(),
            ..Self::default()
        }
    }

    /// Sets the DOI.
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Sets the abstract.
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    /// Sets the subject keywords.
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }
}

/// Manages a collection of academic publications.
///
/// Records keep their insertion order; all searches return matches in that
/// order. Searches over collections at or above the parallel threshold run on
/// the rayon thread pool.
#[derive(Debug, Clone)]
pub struct PublicationManager {
    records: Vec<Publication>,
    positions: HashMap<String, usize>,
    parallel_threshold: usize,
}

impl Default for PublicationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationManager {
    /// Creates an empty manager with the default parallel threshold.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates an empty manager using the configured parallel threshold.
    pub fn from_config(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            positions: HashMap::new(),
            parallel_threshold: config.parallel_threshold.max(1),
        }
    }

    /// Returns the number of publications.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the manager holds no publications.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over publications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.records.iter()
    }

    /// Adds a new publication with a generated ID.
    ///
    /// # Arguments
    ///
    /// * `draft` - Publication metadata
    ///
    /// # Returns
    ///
    /// The newly stored publication.
    pub fn add(&mut self, draft: NewPublication) -> &Publication {
        let now = Utc::now();
        let seed = format!("{}\u{1f}{}", draft.title, draft.authors.join("\u{1f}"));
        let id = identity::generate_unique_id(
            PUBLICATION_PREFIX,
            &seed,
            now.timestamp_micros(),
            |candidate| self.positions.contains_key(candidate),
        );

        let publication = Publication {
            id,
            title: draft.title,
            authors: draft.authors,
            year: draft.year,
            venue: draft.venue,
            doi: draft.doi,
            abstract_text: draft.abstract_text,
            keywords: draft.keywords,
            created_at: now.to_rfc3339(),
        };

        tracing::debug!(id = %publication.id, title = %publication.title, "added publication");

        let position = self.records.len();
        self.positions.insert(publication.id.clone(), position);
        self.records.push(publication);
        &self.records[position]
    }

    /// Stores a publication under its own ID.
    ///
    /// A record with the same ID is replaced in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or contains whitespace.
    pub fn insert(&mut self, publication: Publication) -> Result<()> {
        identity::validate_id_format(&publication.id)?;

        match self.positions.get(&publication.id) {
            Some(&position) => self.records[position] = publication,
            None => {
                self.positions
                    .insert(publication.id.clone(), self.records.len());
                self.records.push(publication);
            }
        }
        Ok(())
    }

    /// Retrieves a publication by ID.
    pub fn get(&self, pub_id: &str) -> Option<&Publication> {
        self.positions
            .get(pub_id)
            .map(|&position| &self.records[position])
    }

    /// Finds publications matching a keyword in title, abstract, or keywords.
    ///
    /// Matching is a case-insensitive substring test.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&Publication> {
        let term = keyword.to_lowercase();
        self.scan(|publication| {
            publication.title.to_lowercase().contains(&term)
                || publication.abstract_text.to_lowercase().contains(&term)
                || publication
                    .keywords
                    .iter()
                    .any(|k| k.to_lowercase().contains(&term))
        })
    }

    /// Finds all publications with an author whose name contains `author_name`.
    ///
    /// Matching is case-insensitive.
    pub fn filter_by_author(&self, author_name: &str) -> Vec<&Publication> {
        let name = author_name.to_lowercase();
        self.scan(|publication| {
            publication
                .authors
                .iter()
                .any(|a| a.to_lowercase().contains(&name))
        })
    }

    /// Returns a frequency map of publication venues.
    pub fn get_venues(&self) -> BTreeMap<String, usize> {
        let mut venues = BTreeMap::new();
        for publication in &self.records {
            *venues.entry(publication.venue.clone()).or_insert(0) += 1;
        }
        venues
    }

    fn scan<F>(&self, predicate: F) -> Vec<&Publication>
    where
        F: Fn(&Publication) -> bool + Sync,
    {
        if self.records.len() >= self.parallel_threshold {
            self.records.par_iter().filter(|p| predicate(*p)).collect()
        } else {
            self.records.iter().filter(|p| predicate(*p)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_add_publication() {
        let mut mgr = PublicationManager::new();
        let publication = mgr.add(NewPublication::new(
            "Test Paper",
            authors(&["Author A"]),
            2025,
            "NeurIPS",
        ));
        assert_eq!(publication.title, "Test Paper");
        assert!(publication.id.starts_with("pub-"));
        assert!(!publication.created_at.is_empty());
        assert_eq!(mgr.count(), 1);
    }

    #[test]
    fn test_add_same_metadata_twice_gets_distinct_ids() {
        let mut mgr = PublicationManager::new();
        let first = mgr
            .add(NewPublication::new("Same", authors(&["A"]), 2025, "V"))
            .id
            .clone();
        let second = mgr
            .add(NewPublication::new("Same", authors(&["A"]), 2025, "V"))
            .id
            .clone();
        assert_ne!(first, second);
        assert_eq!(mgr.count(), 2);
    }

    #[test]
    fn test_get_publication() {
        let mut mgr = PublicationManager::new();
        let id = mgr
            .add(NewPublication::new("Paper", authors(&["A"]), 2025, "ICML"))
            .id
            .clone();
        let result = mgr.get(&id).expect("publication should exist");
        assert_eq!(result.title, "Paper");
    }

    #[test]
    fn test_get_unknown_returns_none() {
        let mgr = PublicationManager::new();
        assert!(mgr.get("fake").is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut mgr = PublicationManager::new();
        let mut first = Publication {
            id: "p1".to_string(),
            title: "Draft".to_string(),
            authors: authors(&["A"]),
            year: 2024,
            venue: "V".to_string(),
            doi: None,
            abstract_text: String::new(),
            keywords: Vec::new(),
            created_at: String::new(),
        };
        let mut second = first.clone();
        second.id = "p2".to_string();

        mgr.insert(first.clone()).unwrap();
        mgr.insert(second).unwrap();
        first.title = "Final".to_string();
        mgr.insert(first).unwrap();

        assert_eq!(mgr.count(), 2);
        let titles: Vec<&str> = mgr.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Final", "Draft"]);
    }

    #[test]
    fn test_insert_rejects_blank_id() {
        let mut mgr = PublicationManager::new();
        let publication = Publication {
            id: " ".to_string(),
            title: "T".to_string(),
            authors: Vec::new(),
            year: 2024,
            venue: "V".to_string(),
            doi: None,
            abstract_text: String::new(),
            keywords: Vec::new(),
            created_at: String::new(),
        };
        assert!(mgr.insert(publication).is_err());
        assert!(mgr.is_empty());
    }

    #[test]
    fn test_search_by_keyword_in_title() {
        let mut mgr = PublicationManager::new();
        mgr.add(NewPublication::new(
            "Machine Learning Survey",
            authors(&["A"]),
            2025,
            "Nature",
        ));
        mgr.add(NewPublication::new(
            "Quantum Computing",
            authors(&["B"]),
            2024,
            "Science",
        ));
        let results = mgr.search_by_keyword("machine");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Machine Learning Survey");
    }

    #[test]
    fn test_search_by_keyword_in_keywords() {
        let mut mgr = PublicationManager::new();
        mgr.add(
            NewPublication::new("Paper A", authors(&["A"]), 2025, "Venue")
                .keywords(vec!["recursion".to_string(), "theory".to_string()]),
        );
        assert_eq!(mgr.search_by_keyword("RECURSION").len(), 1);
    }

    #[test]
    fn test_search_by_keyword_in_abstract() {
        let mut mgr = PublicationManager::new();
        mgr.add(
            NewPublication::new("Paper A", authors(&["A"]), 2025, "Venue")
                .abstract_text("We study Graph Neural Networks."),
        );
        assert_eq!(mgr.search_by_keyword("graph neural").len(), 1);
        assert!(mgr.search_by_keyword("transformer").is_empty());
    }

    #[test]
    fn test_filter_by_author() {
        let mut mgr = PublicationManager::new();
        mgr.add(NewPublication::new("Paper 1", authors(&["Smith", "Jones"]), 2025, "V1"));
        mgr.add(NewPublication::new("Paper 2", authors(&["Jones", "Lee"]), 2025, "V2"));
        mgr.add(NewPublication::new("Paper 3", authors(&["Lee"]), 2025, "V3"));
        let results = mgr.filter_by_author("jones");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Paper 1");
        assert_eq!(results[1].title, "Paper 2");
    }

    #[test]
    fn test_get_venues() {
        let mut mgr = PublicationManager::new();
        mgr.add(NewPublication::new("P1", authors(&["A"]), 2025, "NeurIPS"));
        mgr.add(NewPublication::new("P2", authors(&["B"]), 2025, "NeurIPS"));
        mgr.add(NewPublication::new("P3", authors(&["C"]), 2025, "ICML"));
        let venues = mgr.get_venues();
        assert_eq!(venues["NeurIPS"], 2);
        assert_eq!(venues["ICML"], 1);
        assert_eq!(venues.len(), 2);
    }

    #[test]
    fn test_parallel_scan_preserves_order() {
        let config = Config {
            parallel_threshold: 1,
            ..Config::default()
        };
        let mut mgr = PublicationManager::from_config(&config);
        for i in 0..50 {
            let title = if i % 2 == 0 {
                format!("Even Paper {}", i)
            } else {
                format!("Odd Paper {}", i)
            };
            mgr.add(NewPublication::new(title, authors(&["A"]), 2025, "V"));
        }

        let results = mgr.search_by_keyword("even");
        assert_eq!(results.len(), 25);
        let expected: Vec<String> = (0..50)
            .filter(|i| i % 2 == 0)
            .map(|i| format!("Even Paper {}", i))
            .collect();
        let actual: Vec<String> = results.iter().map(|p| p.title.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_publication_json_uses_abstract_key() {
        let json = r#"{"id":"p1","title":"T","year":2020,"venue":"V","abstract":"text"}"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.abstract_text, "text");
        assert!(publication.authors.is_empty());
        assert!(publication.doi.is_none());
    }
}
