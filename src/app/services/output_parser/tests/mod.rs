//! Test utilities and fixtures for output parser testing
//!
//! This module provides a small test registry and helpers for building
//! tab-delimited file content.

use std::sync::Arc;

use csv::StringRecord;

use crate::app::models::{AggregationLevel, TemporalResolution, Unit};
use crate::app::services::output_registry::{
    LayerDefinition, OutputFileMetadata, OutputFileRegistry, StaticLayer,
};

mod record_tests;

/// Static LAI + NPP gridcell file type
pub const STATIC_KEY: &str = "file_test_static";

/// Per-PFT annual gridcell file type
pub const PFT_KEY: &str = "file_test_pft";

/// Per-PFT daily patch file type
pub const PATCH_KEY: &str = "file_test_patch";

pub fn static_metadata() -> OutputFileMetadata {
    OutputFileMetadata::new(
        STATIC_KEY,
        "Test vegetation",
        "LAI and NPP test output",
        AggregationLevel::Gridcell,
        TemporalResolution::Daily,
        LayerDefinition::fixed(vec![
            StaticLayer::new("LAI", "Leaf area index", Unit::new("m2/m2")),
            StaticLayer::new("NPP", "Net primary production", Unit::new("kgC/m2/day")),
        ]),
    )
    .unwrap()
}

pub fn pft_metadata() -> OutputFileMetadata {
    OutputFileMetadata::new(
        PFT_KEY,
        "Test PFT cover",
        "Per-PFT annual test output",
        AggregationLevel::Gridcell,
        TemporalResolution::Annual,
        LayerDefinition::dynamic(
            Unit::new("m2/m2"),
            AggregationLevel::Gridcell,
            TemporalResolution::Annual,
        ),
    )
    .unwrap()
}

pub fn patch_metadata() -> OutputFileMetadata {
    OutputFileMetadata::new(
        PATCH_KEY,
        "Test patch carbon",
        "Per-PFT daily patch test output",
        AggregationLevel::Patch,
        TemporalResolution::Daily,
        LayerDefinition::dynamic(
            Unit::new("kgC/m2"),
            AggregationLevel::Patch,
            TemporalResolution::Daily,
        ),
    )
    .unwrap()
}

/// Registry holding the three test file types
pub fn create_test_registry() -> Arc<OutputFileRegistry> {
    let mut registry = OutputFileRegistry::new();
    registry.register(static_metadata()).unwrap();
    registry.register(pft_metadata()).unwrap();
    registry.register(patch_metadata()).unwrap();
    Arc::new(registry)
}

/// Join space-separated rows into tab-delimited file content
pub fn tsv(rows: &[&str]) -> String {
    let mut content = rows
        .iter()
        .map(|r| r.split(' ').collect::<Vec<_>>().join("\t"))
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    content
}

/// Build a tokenized row from its fields
pub fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}
