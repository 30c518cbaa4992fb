//! Metadata describing one known output file type

use super::layers::LayerDefinition;
use crate::app::models::{AggregationLevel, TemporalResolution, metadata_columns};
use crate::constants::DAY_COLUMN;
use crate::{Error, Result};

/// Metadata for one catalogue entry
///
/// Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFileMetadata {
    key: String,
    name: String,
    description: String,
    level: AggregationLevel,
    resolution: TemporalResolution,
    layers: LayerDefinition,
}

impl OutputFileMetadata {
    /// Create metadata, rejecting blank keys, names and descriptions
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        level: AggregationLevel,
        resolution: TemporalResolution,
        layers: LayerDefinition,
    ) -> Result<Self> {
        let metadata = Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            level,
            resolution,
            layers,
        };

        if metadata.key.trim().is_empty() {
            return Err(Error::registration("File type key cannot be empty"));
        }
        if metadata.name.trim().is_empty() {
            return Err(Error::registration(format!(
                "File type {} has an empty name",
                metadata.key
            )));
        }
        if metadata.description.trim().is_empty() {
            return Err(Error::registration(format!(
                "File type {} has an empty description",
                metadata.key
            )));
        }

        Ok(metadata)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn level(&self) -> AggregationLevel {
        self.level
    }

    pub fn resolution(&self) -> TemporalResolution {
        self.resolution
    }

    pub fn layers(&self) -> &LayerDefinition {
        &self.layers
    }

    /// Every metadata column a file of this type may carry
    pub fn metadata_columns(&self) -> Vec<&'static str> {
        metadata_columns(self.level, self.resolution)
    }

    /// Metadata columns that must be present in the header (all but Day)
    pub fn required_columns(&self) -> Vec<&'static str> {
        self.metadata_columns()
            .into_iter()
            .filter(|c| *c != DAY_COLUMN)
            .collect()
    }

    /// Whether a header column is structural metadata for this file type
    pub fn is_metadata_column(&self, column: &str) -> bool {
        self.metadata_columns().contains(&column)
    }
}
