//! Configuration management and validation.
//!
//! Provides the import configuration (batching, concurrency, failure
//! policy, field separator and output location) with serde support so it
//! can be loaded from a JSON file and overridden from the command line.

use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_OUTPUT_DIR_NAME, MAX_BATCH_SIZE, MIN_BATCH_SIZE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How fields of a row are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSeparator {
    /// Single tab characters; fields are trimmed
    #[default]
    Tab,
    /// Runs of any whitespace, as in column-aligned output
    Whitespace,
}

/// Global configuration for an import run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Points sent to the sink per batch
    pub batch_size: usize,

    /// Maximum number of files parsed concurrently
    pub max_concurrent_files: usize,

    /// Abort the whole import on the first failed file instead of skipping it
    pub fail_fast: bool,

    /// Field separator of the output files
    pub separator: FieldSeparator,

    /// Directory receiving the exported series
    pub output_dir: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_concurrent_files: num_cpus::get(),
            fail_fast: false,
            separator: FieldSeparator::Tab,
            output_dir: None,
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config: ImportConfig = serde_json::from_str(&content).map_err(|e| {
            Error::serialization(
                format!("Invalid configuration file {}", path.display()),
                e,
            )
        })?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    /// Set points per upload batch
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set maximum concurrently parsed files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Abort on first failure
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_separator(mut self, separator: FieldSeparator) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    /// Output directory, defaulting to the user data directory
    pub fn resolved_output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|d| d.join(DEFAULT_OUTPUT_DIR_NAME).join("output"))
            .ok_or_else(|| {
                Error::configuration(
                    "Could not determine user data directory; pass --output explicitly",
                )
            })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&self.batch_size) {
            return Err(Error::configuration(format!(
                "Batch size {} must be between {} and {}",
                self.batch_size, MIN_BATCH_SIZE, MAX_BATCH_SIZE
            )));
        }

        if self.max_concurrent_files == 0 {
            return Err(Error::configuration(
                "Maximum concurrent files must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ImportConfig::default();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert!(config.max_concurrent_files >= 1);
        assert!(!config.fail_fast);
        assert_eq!(config.separator, FieldSeparator::Tab);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ImportConfig::new()
            .with_batch_size(1_000)
            .with_max_concurrent_files(2)
            .with_fail_fast(true)
            .with_separator(FieldSeparator::Whitespace)
            .with_output_dir(PathBuf::from("/tmp/out"));

        assert_eq!(config.batch_size, 1_000);
        assert_eq!(config.max_concurrent_files, 2);
        assert!(config.fail_fast);
        assert_eq!(config.separator, FieldSeparator::Whitespace);
        assert_eq!(
            config.resolved_output_dir().unwrap(),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ImportConfig::new().with_batch_size(0).validate().is_err());
        assert!(
            ImportConfig::new()
                .with_batch_size(MAX_BATCH_SIZE + 1)
                .validate()
                .is_err()
        );
        assert!(
            ImportConfig::new()
                .with_max_concurrent_files(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_from_file_with_partial_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"batch_size": 2500, "separator": "whitespace"}}"#).unwrap();

        let config = ImportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.batch_size, 2500);
        assert_eq!(config.separator, FieldSeparator::Whitespace);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "batch_size = 10").unwrap();

        assert!(matches!(
            ImportConfig::from_file(file.path()),
            Err(Error::Serialization { .. })
        ));
    }
}
