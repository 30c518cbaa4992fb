//! Catalogue command implementation
//!
//! Lists the registered output file types as an aligned table or as JSON.

use crate::app::models::{AggregationLevel, TemporalResolution};
use crate::app::services::output_registry::{OutputFileMetadata, OutputFileRegistry};
use crate::cli::args::{CatalogueArgs, CatalogueFormat};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

/// One catalogue listing entry
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueListing {
    pub key: String,
    pub name: String,
    pub description: String,
    pub level: AggregationLevel,
    pub resolution: TemporalResolution,
    pub dynamic_layers: bool,
    pub layers: String,
}

impl From<&OutputFileMetadata> for CatalogueListing {
    fn from(metadata: &OutputFileMetadata) -> Self {
        Self {
            key: metadata.key().to_string(),
            name: metadata.name().to_string(),
            description: metadata.description().to_string(),
            level: metadata.level(),
            resolution: metadata.resolution(),
            dynamic_layers: metadata.layers().is_dynamic(),
            layers: metadata.layers().summary(),
        }
    }
}

/// Catalogue entries matching an optional case-insensitive filter
pub fn list_entries(registry: &OutputFileRegistry, filter: Option<&str>) -> Vec<CatalogueListing> {
    let filter = filter.map(str::to_lowercase);
    registry
        .iter()
        .filter(|m| match &filter {
            Some(f) => m.key().to_lowercase().contains(f) || m.name().to_lowercase().contains(f),
            None => true,
        })
        .map(CatalogueListing::from)
        .collect()
}

/// Catalogue command runner
pub fn run_catalogue(args: &CatalogueArgs) -> Result<Vec<CatalogueListing>> {
    let registry = OutputFileRegistry::builtin().context("Failed to build catalogue")?;
    let entries = list_entries(&registry, args.filter.as_deref());

    match args.format {
        CatalogueFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize catalogue")?;
            println!("{}", json);
        }
        CatalogueFormat::Table => print_table(&entries),
    }

    Ok(entries)
}

fn print_table(entries: &[CatalogueListing]) {
    let key_width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0).max(3);

    println!(
        "{:<key_width$}  {:<10}  {:<8}  {}",
        "Key".bold(),
        "Level".bold(),
        "Period".bold(),
        "Name".bold(),
    );
    for entry in entries {
        println!(
            "{:<key_width$}  {:<10}  {:<8}  {}",
            entry.key.bright_cyan(),
            entry.level.as_str(),
            entry.resolution.as_str(),
            entry.name
        );
    }
    println!(
        "\n{} {}",
        entries.len().to_string().bright_white().bold(),
        "output file types".bright_green()
    );
}
