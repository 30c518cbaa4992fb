//! Layer definitions for column classification
//!
//! A layer definition decides, for a header column name, whether it holds
//! layer data and which unit applies. Static definitions list their columns
//! up front; dynamic definitions accept any non-metadata column, which is
//! how PFT-keyed output (one column per plant functional type) is handled.

use crate::app::models::{AggregationLevel, TemporalResolution, Unit, metadata_columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A data column declared ahead of time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLayer {
    /// Header column name
    pub column: String,

    /// Human-readable layer name
    pub name: String,

    pub unit: Unit,
}

impl StaticLayer {
    pub fn new(column: impl Into<String>, name: impl Into<String>, unit: Unit) -> Self {
        Self {
            column: column.into(),
            name: name.into(),
            unit,
        }
    }
}

/// Column classification rule of one output file type
#[derive(Debug, Clone, PartialEq)]
pub enum LayerDefinition {
    /// Explicit list of data columns and their units
    Static { layers: Vec<StaticLayer> },

    /// Every column outside the metadata set is a data layer with one shared unit
    Dynamic {
        unit: Unit,
        metadata_columns: Vec<&'static str>,
    },
}

impl LayerDefinition {
    /// Static definition from explicit layers
    pub fn fixed(layers: Vec<StaticLayer>) -> Self {
        LayerDefinition::Static { layers }
    }

    /// Static definition where every column shares one unit
    pub fn columns_with_unit<S: AsRef<str>>(columns: &[S], unit: Unit) -> Self {
        let layers = columns
            .iter()
            .map(|c| StaticLayer::new(c.as_ref(), c.as_ref(), unit.clone()))
            .collect();
        LayerDefinition::Static { layers }
    }

    /// Dynamic definition for files of the given level and resolution
    pub fn dynamic(unit: Unit, level: AggregationLevel, resolution: TemporalResolution) -> Self {
        LayerDefinition::Dynamic {
            unit,
            metadata_columns: metadata_columns(level, resolution),
        }
    }

    /// Whether `column` holds layer data
    pub fn is_data_layer(&self, column: &str) -> bool {
        match self {
            LayerDefinition::Static { layers } => layers.iter().any(|l| l.column == column),
            LayerDefinition::Dynamic {
                metadata_columns, ..
            } => !metadata_columns.contains(&column),
        }
    }

    /// Unit of a data column
    ///
    /// Fails with [`Error::NotADataLayer`] when the column is not a data layer.
    pub fn units(&self, column: &str) -> Result<&Unit> {
        match self {
            LayerDefinition::Static { layers } => layers
                .iter()
                .find(|l| l.column == column)
                .map(|l| &l.unit)
                .ok_or_else(|| Error::not_a_data_layer(column)),
            LayerDefinition::Dynamic { unit, .. } => {
                if self.is_data_layer(column) {
                    Ok(unit)
                } else {
                    Err(Error::not_a_data_layer(column))
                }
            }
        }
    }

    /// Declared layers of a static definition
    pub fn static_layers(&self) -> Option<&[StaticLayer]> {
        match self {
            LayerDefinition::Static { layers } => Some(layers),
            LayerDefinition::Dynamic { .. } => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, LayerDefinition::Dynamic { .. })
    }

    /// Short description used in catalogue listings
    pub fn summary(&self) -> String {
        match self {
            LayerDefinition::Static { layers } => {
                let columns: Vec<&str> = layers.iter().map(|l| l.column.as_str()).collect();
                format!("{} layers: {}", layers.len(), columns.join(", "))
            }
            LayerDefinition::Dynamic { unit, .. } => format!("per-PFT layers ({})", unit),
        }
    }
}
