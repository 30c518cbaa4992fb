//! File-backed sink writing one directory per quantity
//!
//! Layout under the root directory:
//!
//! ```text
//! <id>/quantity.json     quantity record plus its layer records
//! <id>/<layer>.jsonl     one JSON data point per line
//! ```
//!
//! Directory and file names are lowercase slugs of the quantity id (the
//! source file path without extension) and the layer names. Within one
//! sink a directory or layer file is written at most once; a second
//! quantity or layer mapping to the same slug is an output conflict.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::sink::{LayerRecord, QuantityRecord, QuantitySink};
use crate::app::models::DataPoint;
use crate::constants::{LAYER_FILE_EXTENSION, QUANTITY_RECORD_FILE};
use crate::{Error, Result};

#[derive(Debug, Serialize)]
struct QuantityDocument<'a> {
    #[serde(flatten)]
    quantity: &'a QuantityRecord,
    layers: &'a [LayerRecord],
}

/// Sink writing JSON documents below a root directory
#[derive(Debug)]
pub struct JsonDirectorySink {
    root: PathBuf,
    current: Option<(QuantityRecord, Vec<LayerRecord>)>,

    /// Quantity directories written by this sink, with the id that claimed them
    claimed: HashMap<PathBuf, String>,
}

impl JsonDirectorySink {
    /// Create the sink, creating `root` if needed
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await.map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            current: None,
            claimed: HashMap::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the quantity with the given id
    pub fn quantity_dir(&self, quantity: &str) -> PathBuf {
        self.root.join(slug(quantity))
    }

    /// Points file of the given layer
    pub fn layer_path(&self, quantity: &str, layer: &str) -> PathBuf {
        self.quantity_dir(quantity)
            .join(format!("{}.{}", slug(layer), LAYER_FILE_EXTENSION))
    }

    async fn write_quantity_document(&self) -> Result<()> {
        let Some((quantity, layers)) = &self.current else {
            return Ok(());
        };

        let document = QuantityDocument { quantity, layers };
        let json = serde_json::to_string_pretty(&document).map_err(|e| {
            Error::serialization(format!("Failed to serialize quantity {}", quantity.name), e)
        })?;

        let path = self.quantity_dir(&quantity.id).join(QUANTITY_RECORD_FILE);
        fs::write(&path, json)
            .await
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
    }

    fn ensure_current(&self, quantity: &str) -> Result<()> {
        match &self.current {
            Some((record, _)) if record.id == quantity => Ok(()),
            _ => Err(Error::configuration(format!(
                "Quantity {} was not created before its layers",
                quantity
            ))),
        }
    }
}

impl QuantitySink for JsonDirectorySink {
    async fn create_quantity(&mut self, quantity: &QuantityRecord) -> Result<()> {
        let dir = self.quantity_dir(&quantity.id);
        if let Some(owner) = self.claimed.get(&dir) {
            return Err(Error::output_conflict(format!(
                "Quantities '{}' and '{}' both map to {}",
                owner,
                quantity.id,
                dir.display()
            )));
        }

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::io(format!("Failed to create {}", dir.display()), e))?;

        self.claimed.insert(dir.clone(), quantity.id.clone());
        self.current = Some((quantity.clone(), Vec::new()));
        self.write_quantity_document().await?;

        debug!("Created quantity directory {}", dir.display());
        Ok(())
    }

    async fn create_layer(&mut self, quantity: &str, layer: &LayerRecord) -> Result<()> {
        self.ensure_current(quantity)?;

        let layer_slug = slug(&layer.name);
        if let Some((_, layers)) = &self.current {
            if let Some(existing) = layers.iter().find(|l| slug(&l.name) == layer_slug) {
                return Err(Error::output_conflict(format!(
                    "Layers '{}' and '{}' of quantity '{}' both map to {}.{}",
                    existing.name, layer.name, quantity, layer_slug, LAYER_FILE_EXTENSION
                )));
            }
        }

        // Files left by an earlier run into the same root are replaced
        let path = self.layer_path(quantity, &layer.name);
        fs::File::create(&path)
            .await
            .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

        if let Some((_, layers)) = &mut self.current {
            layers.push(layer.clone());
        }
        self.write_quantity_document().await
    }

    async fn append_points(
        &mut self,
        quantity: &str,
        layer: &str,
        batch: &[DataPoint],
    ) -> Result<()> {
        self.ensure_current(quantity)?;

        let mut buffer = String::new();
        for point in batch {
            let line = serde_json::to_string(point).map_err(|e| {
                Error::serialization(format!("Failed to serialize point of {}", layer), e)
            })?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        let path = self.layer_path(quantity, layer);
        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        file.write_all(buffer.as_bytes())
            .await
            .map_err(|e| Error::io(format!("Failed to append to {}", path.display()), e))?;
        file.flush()
            .await
            .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))
    }
}

/// Lowercase name with every run of non-alphanumerics replaced by `_`
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}
