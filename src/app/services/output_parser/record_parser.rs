//! Individual data row parsing
//!
//! This module turns one tokenized data row into its coordinates, timestamp,
//! structural identifiers and one value per data column.

use chrono::{DateTime, Utc};
use csv::StringRecord;

use super::field_parsers::{
    day_of_year_timestamp, parse_coordinate, parse_day, parse_identifier, parse_value, parse_year,
};
use super::header::ColumnLayout;
use crate::constants::{
    DAY_COLUMN, DEFAULT_DAY_OF_YEAR, INDIVIDUAL_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN,
    PATCH_COLUMN, STAND_COLUMN, YEAR_COLUMN,
};
use crate::{Error, Result};

/// Fields of one data row
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub longitude: f64,
    pub latitude: f64,
    pub timestamp: DateTime<Utc>,
    pub stand: Option<u32>,
    pub patch: Option<u32>,
    pub individual: Option<u32>,

    /// One value per data column, in layout order
    pub values: Vec<f64>,
}

/// Parse a data row against a validated header layout
///
/// `row` is the 1-based line number used in error messages.
pub fn parse_row(
    fields: &StringRecord,
    row: usize,
    layout: &ColumnLayout,
    source: &str,
) -> Result<ParsedRow> {
    if fields.len() != layout.column_count {
        return Err(Error::column_count(
            source,
            row,
            fields.len(),
            layout.column_count,
        ));
    }

    let longitude = parse_coordinate(&fields[layout.longitude], LONGITUDE_COLUMN, row, source)?;
    let latitude = parse_coordinate(&fields[layout.latitude], LATITUDE_COLUMN, row, source)?;
    let year_raw = &fields[layout.year];
    let year = parse_year(year_raw, YEAR_COLUMN, row, source)?;
    let day = match layout.day {
        Some(index) => parse_day(&fields[index], DAY_COLUMN, row, source)?,
        None => DEFAULT_DAY_OF_YEAR,
    };
    let timestamp = day_of_year_timestamp(year, day)
        .ok_or_else(|| Error::invalid_field(source, YEAR_COLUMN, row, year_raw))?;

    let identifier = |index: Option<usize>, field: &str| -> Result<Option<u32>> {
        index
            .map(|i| parse_identifier(&fields[i], field, row, source))
            .transpose()
    };
    let stand = identifier(layout.stand, STAND_COLUMN)?;
    let patch = identifier(layout.patch, PATCH_COLUMN)?;
    let individual = identifier(layout.individual, INDIVIDUAL_COLUMN)?;

    let values = layout
        .data_columns
        .iter()
        .map(|column| parse_value(&fields[column.index], &column.name, row, source))
        .collect::<Result<Vec<f64>>>()?;

    Ok(ParsedRow {
        longitude,
        latitude,
        timestamp,
        stand,
        patch,
        individual,
        values,
    })
}
