// Rust guideline compliant 2026-10-16

//! Dataset cataloging and metadata management.
//!
//! The DatasetCatalog registers research datasets and links them to
//! publication IDs. Linked IDs are not checked against any publication store.

use crate::identity::{self, DATASET_PREFIX};
use crate::{Config, Error, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A research dataset with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier (format: ds-XXXXXXXXXX for generated IDs).
    pub id: String,
    /// Dataset name.
    pub name: String,
    /// Description of contents.
    #[serde(default)]
    pub description: String,
    /// File format (csv, json, parquet, etc.).
    pub format: String,
    /// Size in bytes.
    #[serde(default)]
    pub size_bytes: u64,
    /// Semantic version string.
    #[serde(default = "default_version")]
    pub version: String,
    /// License identifier.
    #[serde(default = "default_license")]
    pub license: String,
    /// Categorization tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// IDs of publications associated with this dataset.
    #[serde(default)]
    pub linked_publications: Vec<String>,
}

fn default_version() -> String {
    Config::default().default_dataset_version
}

fn default_license() -> String {
    Config::default().default_license
}

/// Input for [`DatasetCatalog::register`].
///
/// `version` and `license` fall back to the catalog defaults when unset.
#[derive(Debug, Clone, Default)]
pub struct NewDataset {
    pub name: String,
    pub description: String,
    pub format: String,
    pub size_bytes: u64,
    pub version: Option<String>,
    pub license: Option<String>,
    pub tags: Vec<String>,
}

impl NewDataset {
    /// Creates an input with the required fields set.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        format: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            format: format.into(),
            size_bytes,
            ..Self::default()
        }
    }

    /// Sets the version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the license.
    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Sets the categorization tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Exported view of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub dataset_id: String,
    pub name: String,
    pub format: String,
    pub size_bytes: u64,
    pub version: String,
    pub tags: Vec<String>,
    pub linked_publications: Vec<String>,
}

impl From<&Dataset> for DatasetSummary {
    fn from(dataset: &Dataset) -> Self {
        Self {
            dataset_id: dataset.id.clone(),
            name: dataset.name.clone(),
            format: dataset.format.clone(),
            size_bytes: dataset.size_bytes,
            version: dataset.version.clone(),
            tags: dataset.tags.clone(),
            linked_publications: dataset.linked_publications.clone(),
        }
    }
}

/// Catalog of research datasets with metadata and publication links.
#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    records: Vec<Dataset>,
    positions: HashMap<String, usize>,
    default_version: String,
    default_license: String,
}

impl Default for DatasetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetCatalog {
    /// Creates an empty catalog with the built-in defaults.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates an empty catalog using the configured version and license defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            positions: HashMap::new(),
            default_version: config.default_dataset_version.clone(),
            default_license: config.default_license.clone(),
        }
    }

    /// Returns the number of datasets.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no datasets.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over datasets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.records.iter()
    }

    /// Registers a new dataset with a generated ID.
    ///
    /// # Arguments
    ///
    /// * `draft` - Dataset metadata
    ///
    /// # Returns
    ///
    /// The newly registered dataset.
    pub fn register(&mut self, draft: NewDataset) -> &Dataset {
        let now = Utc::now();
        let seed = format!("{}\u{1f}{}", draft.name, draft.format);
        let id = identity::generate_unique_id(
            DATASET_PREFIX,
            &seed,
            now.timestamp_micros(),
            |candidate| self.positions.contains_key(candidate),
        );

        let dataset = Dataset {
            id,
            name: draft.name,
            description: draft.description,
            format: draft.format,
            size_bytes: draft.size_bytes,
            version: draft
                .version
                .unwrap_or_else(|| self.default_version.clone()),
            license: draft
                .license
                .unwrap_or_else(|| self.default_license.clone()),
            tags: draft.tags,
            linked_publications: Vec::new(),
        };

        tracing::debug!(id = %dataset.id, name = %dataset.name, "registered dataset");

        let position = self.records.len();
        self.positions.insert(dataset.id.clone(), position);
        self.records.push(dataset);
        &self.records[position]
    }

    /// Stores a dataset under its own ID.
    ///
    /// A record with the same ID is replaced in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is empty or contains whitespace.
    pub fn insert(&mut self, dataset: Dataset) -> Result<()> {
        identity::validate_id_format(&dataset.id)?;

        match self.positions.get(&dataset.id) {
            Some(&position) => self.records[position] = dataset,
            None => {
                self.positions.insert(dataset.id.clone(), self.records.len());
                self.records.push(dataset);
            }
        }
        Ok(())
    }

    /// Retrieves a dataset by ID.
    pub fn get(&self, dataset_id: &str) -> Option<&Dataset> {
        self.positions
            .get(dataset_id)
            .map(|&position| &self.records[position])
    }

    /// Links a publication to a dataset.
    ///
    /// Linking the same publication twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the dataset does not exist.
    pub fn link_publication(&mut self, dataset_id: &str, pub_id: &str) -> Result<()> {
        let position = *self
            .positions
            .get(dataset_id)
            .ok_or_else(|| Error::NotFound(format!("Dataset {} not found", dataset_id)))?;

        let dataset = &mut self.records[position];
        if !dataset.linked_publications.iter().any(|id| id == pub_id) {
            dataset.linked_publications.push(pub_id.to_string());
        }
        Ok(())
    }

    /// Finds datasets carrying exactly the given tag.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&Dataset> {
        self.records
            .iter()
            .filter(|dataset| dataset.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Returns the total size of all datasets in bytes.
    pub fn get_total_size(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |total, dataset| total.saturating_add(dataset.size_bytes))
    }

    /// Exports the catalog as summaries in registration order.
    pub fn export(&self) -> Vec<DatasetSummary> {
        self.records.iter().map(DatasetSummary::from).collect()
    }
}
