//! Shared test utilities and fixtures for output registry tests

use super::{LayerDefinition, OutputFileMetadata, StaticLayer};
use crate::app::models::{AggregationLevel, TemporalResolution, Unit};


/// Create metadata with an explicit LAI/NPP layer list
pub fn create_static_metadata(key: &str) -> OutputFileMetadata {
    OutputFileMetadata::new(
        key,
        "Test static file",
        "LAI and NPP for registry tests",
        AggregationLevel::Gridcell,
        TemporalResolution::Annual,
        LayerDefinition::fixed(vec![
            StaticLayer::new("LAI", "Leaf area index", Unit::new("m2/m2")),
            StaticLayer::new("NPP", "Net primary production", Unit::new("kgC/m2/year")),
        ]),
    )
    .unwrap()
}

/// Create metadata with a dynamic per-PFT layer definition
pub fn create_pft_metadata(
    key: &str,
    level: AggregationLevel,
    resolution: TemporalResolution,
) -> OutputFileMetadata {
    OutputFileMetadata::new(
        key,
        "Test PFT file",
        "Per-PFT values for registry tests",
        level,
        resolution,
        LayerDefinition::dynamic(Unit::new("kgC/m2"), level, resolution),
    )
    .unwrap()
}
