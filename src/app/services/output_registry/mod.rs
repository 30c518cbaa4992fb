//! Output file type registry for O(1) metadata lookups
//!
//! This module maps catalogue keys such as `file_dave_lai` to the metadata of
//! that output file type: display name, description, aggregation level,
//! temporal resolution and layer definition. The registry is populated once
//! at startup and is read-only afterwards, so it can be shared through an
//! `Arc` across concurrent parses without locking.

use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::{Error, Result};

pub mod catalogue;
pub mod layers;
pub mod metadata;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use catalogue::{CATALOGUE, CatalogueEntry, LayerShape};
pub use layers::{LayerDefinition, StaticLayer};
pub use metadata::OutputFileMetadata;

/// Registry of known output file types keyed by catalogue key
#[derive(Debug, Clone, Default)]
pub struct OutputFileRegistry {
    entries: HashMap<String, OutputFileMetadata>,
}

impl OutputFileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the built-in catalogue
    pub fn builtin() -> Result<Self> {
        Self::from_catalogue(CATALOGUE)
    }

    /// Build a registry from catalogue entries
    pub fn from_catalogue(entries: &[CatalogueEntry]) -> Result<Self> {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry.to_metadata()?)?;
        }

        debug!("Registered {} output file types", registry.len());
        Ok(registry)
    }

    /// Register a file type; each key may be registered once
    pub fn register(&mut self, metadata: OutputFileMetadata) -> Result<()> {
        if self.entries.contains_key(metadata.key()) {
            return Err(Error::registration(format!(
                "File type {} is registered more than once",
                metadata.key()
            )));
        }

        self.entries.insert(metadata.key().to_string(), metadata);
        Ok(())
    }

    /// Get metadata for a file type key
    pub fn get_metadata(&self, key: &str) -> Result<&OutputFileMetadata> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::unknown_file_type(key))
    }

    /// All registered file type keys
    pub fn get_all_file_types(&self) -> BTreeSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All metadata sorted by key
    pub fn iter(&self) -> impl Iterator<Item = &OutputFileMetadata> {
        let mut all: Vec<&OutputFileMetadata> = self.entries.values().collect();
        all.sort_by(|a, b| a.key().cmp(b.key()));
        all.into_iter()
    }
}
