// Rust guideline compliant 2026-10-16

//! Configuration management for Scholar.

use crate::citations::DEFAULT_MAX_DEPTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "scholar.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
}

/// Configuration for Scholar behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Depth bound used by citation chain queries when none is given.
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,

    /// Collection size at which linear scans switch to a parallel scan.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// License assigned to datasets registered without one.
    #[serde(default = "default_license")]
    pub default_license: String,

    /// Version assigned to datasets registered without one.
    #[serde(default = "default_dataset_version")]
    pub default_dataset_version: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_max_chain_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_parallel_threshold() -> usize {
    1_000
}

fn default_license() -> String {
    "CC-BY-4.0".to_string()
}

fn default_dataset_version() -> String {
    "1.0.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chain_depth: default_max_chain_depth(),
            parallel_threshold: default_parallel_threshold(),
            default_license: default_license(),
            default_dataset_version: default_dataset_version(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/scholar.toml`
    /// 3. Environment variables with `SCHOLAR_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `scholar.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment override cannot be parsed
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            tracing::debug!(path = %config_path.display(), "loaded config file");
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `SCHOLAR_*` overrides read through `lookup`.
    ///
    /// Supported keys:
    /// - `SCHOLAR_MAX_CHAIN_DEPTH` - Default chain depth bound
    /// - `SCHOLAR_PARALLEL_THRESHOLD` - Parallel scan threshold
    /// - `SCHOLAR_DEFAULT_LICENSE` - Default dataset license
    /// - `SCHOLAR_DEFAULT_DATASET_VERSION` - Default dataset version
    /// - `SCHOLAR_OUTPUT_FORMAT` - Output format (json/table)
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enum value cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SCHOLAR_MAX_CHAIN_DEPTH") {
            self.max_chain_depth = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "SCHOLAR_MAX_CHAIN_DEPTH must be a non-negative number".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("SCHOLAR_PARALLEL_THRESHOLD") {
            self.parallel_threshold = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "SCHOLAR_PARALLEL_THRESHOLD must be a positive number".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("SCHOLAR_DEFAULT_LICENSE") {
            self.default_license = val;
        }

        if let Some(val) = lookup("SCHOLAR_DEFAULT_DATASET_VERSION") {
            self.default_dataset_version = val;
        }

        if let Some(val) = lookup("SCHOLAR_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                _ => {
                    return Err(Error::InvalidConfig(
                        "SCHOLAR_OUTPUT_FORMAT must be json or table".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - parallel_threshold is zero
    /// - default_license or default_dataset_version is blank
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be greater than 0".to_string(),
            ));
        }

        if self.default_license.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_license cannot be empty".to_string(),
            ));
        }

        if self.default_dataset_version.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "default_dataset_version cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/scholar.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_chain_depth, 5);
        assert_eq!(config.parallel_threshold, 1_000);
        assert_eq!(config.default_license, "CC-BY-4.0");
        assert_eq!(config.default_dataset_version, "1.0.0");
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_from_partial_file_uses_defaults() {
        let config: Config = toml::from_str("max_chain_depth = 2").unwrap();
        assert_eq!(config.max_chain_depth, 2);
        assert_eq!(config.parallel_threshold, 1_000);
        assert_eq!(config.default_license, "CC-BY-4.0");
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
max_chain_depth = 3
parallel_threshold = 50
default_license = "MIT"
default_dataset_version = "0.1.0"
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.max_chain_depth, 3);
        assert_eq!(config.parallel_threshold, 50);
        assert_eq!(config.default_license, "MIT");
        assert_eq!(config.default_dataset_version, "0.1.0");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "max_chain_depth = [").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validation_zero_threshold() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "parallel_threshold = 0",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_blank_license() {
        let config = Config {
            default_license: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_applied() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[
                ("SCHOLAR_MAX_CHAIN_DEPTH", "8"),
                ("SCHOLAR_PARALLEL_THRESHOLD", "10"),
                ("SCHOLAR_DEFAULT_LICENSE", "CC0-1.0"),
                ("SCHOLAR_DEFAULT_DATASET_VERSION", "2.0.0"),
                ("SCHOLAR_OUTPUT_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.max_chain_depth, 8);
        assert_eq!(config.parallel_threshold, 10);
        assert_eq!(config.default_license, "CC0-1.0");
        assert_eq!(config.default_dataset_version, "2.0.0");
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_override_zero_depth_allowed() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup_from(&[("SCHOLAR_MAX_CHAIN_DEPTH", "0")]))
            .unwrap();
        assert_eq!(config.max_chain_depth, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_override_invalid_depth() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("SCHOLAR_MAX_CHAIN_DEPTH", "deep")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_override_invalid_format() {
        let mut config = Config::default();
        let result = config.apply_overrides(lookup_from(&[("SCHOLAR_OUTPUT_FORMAT", "xml")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_overridden_by_lookup() {
        let mut config: Config = toml::from_str("max_chain_depth = 1").unwrap();
        config
            .apply_overrides(lookup_from(&[("SCHOLAR_MAX_CHAIN_DEPTH", "4")]))
            .unwrap();
        assert_eq!(config.max_chain_depth, 4);
    }

    #[test]
    fn test_config_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let original = Config {
            max_chain_depth: 7,
            parallel_threshold: 64,
            default_license: "ODbL-1.0".to_string(),
            default_dataset_version: "3.1.4".to_string(),
            output_format: OutputFormat::Json,
        };

        original.save(temp_dir.path()).unwrap();
        let content = std::fs::read_to_string(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        let reloaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(original, reloaded);
    }
}
