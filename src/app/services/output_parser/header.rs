//! Header validation and column classification
//!
//! This module analyzes the header row of an output file against the
//! metadata of its file type: it locates the structural metadata columns,
//! checks the required ones are present, and classifies every remaining
//! column as a data layer with a resolved unit.

use std::collections::HashMap;

use csv::StringRecord;

use crate::app::models::Unit;
use crate::app::services::output_registry::OutputFileMetadata;
use crate::constants::{
    DAY_COLUMN, INDIVIDUAL_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, PATCH_COLUMN,
    STAND_COLUMN, YEAR_COLUMN,
};
use crate::{Error, Result};

/// A data column found in the header
#[derive(Debug, Clone, PartialEq)]
pub struct DataColumn {
    /// Position in the row
    pub index: usize,
    pub name: String,
    pub unit: Unit,
}

/// Column positions of a validated header
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    /// Number of fields every data row must have
    pub column_count: usize,

    pub longitude: usize,
    pub latitude: usize,
    pub year: usize,

    /// Absent when the file carries no Day column
    pub day: Option<usize>,

    pub stand: Option<usize>,
    pub patch: Option<usize>,
    pub individual: Option<usize>,

    /// Data columns in header order
    pub data_columns: Vec<DataColumn>,
}

impl ColumnLayout {
    /// Validate header columns and build the layout
    ///
    /// Checks, in order: required metadata columns present, no empty names,
    /// no duplicate names, every other column a data layer, at least one
    /// data column.
    pub fn analyze(
        header: &StringRecord,
        metadata: &OutputFileMetadata,
        source: &str,
    ) -> Result<Self> {
        let columns: Vec<&str> = header.iter().collect();

        let mut name_to_index: HashMap<&str, usize> = HashMap::with_capacity(columns.len());
        let mut duplicate = None;
        for (index, name) in columns.iter().enumerate() {
            if name_to_index.insert(*name, index).is_some() && duplicate.is_none() {
                duplicate = Some(*name);
            }
        }

        let required = |column: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| *c == column)
                .ok_or_else(|| Error::missing_column(source, column))
        };

        for column in metadata.required_columns() {
            required(column)?;
        }

        if let Some(index) = columns.iter().position(|c| c.is_empty()) {
            return Err(Error::empty_column(source, index + 1));
        }

        if let Some(name) = duplicate {
            return Err(Error::duplicate_column(source, name));
        }

        let metadata_columns = metadata.metadata_columns();
        let layers = metadata.layers();
        let mut data_columns = Vec::new();

        for (index, name) in columns.iter().enumerate() {
            if metadata_columns.contains(name) {
                continue;
            }

            if !layers.is_data_layer(name) {
                return Err(Error::unexpected_column(source, *name, metadata.key()));
            }

            data_columns.push(DataColumn {
                index,
                name: name.to_string(),
                unit: layers.units(name)?.clone(),
            });
        }

        if data_columns.is_empty() {
            return Err(Error::no_data_columns(source));
        }

        let optional = |column: &str| -> Option<usize> {
            if metadata_columns.contains(&column) {
                name_to_index.get(column).copied()
            } else {
                None
            }
        };

        Ok(ColumnLayout {
            column_count: columns.len(),
            longitude: required(LONGITUDE_COLUMN)?,
            latitude: required(LATITUDE_COLUMN)?,
            year: required(YEAR_COLUMN)?,
            day: optional(DAY_COLUMN),
            stand: optional(STAND_COLUMN),
            patch: optional(PATCH_COLUMN),
            individual: optional(INDIVIDUAL_COLUMN),
            data_columns,
        })
    }

    /// Names of the data columns in header order
    pub fn data_column_names(&self) -> Vec<&str> {
        self.data_columns.iter().map(|c| c.name.as_str()).collect()
    }
}
