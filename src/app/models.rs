//! Data models for GUESS output import
//!
//! This module contains the core data structures for representing parsed
//! LPJ-GUESS output: units, aggregation levels, temporal resolutions,
//! data points, per-column series and the quantity that bundles them.

use crate::constants::{
    DAY_COLUMN, INDIVIDUAL_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN, OUTPUT_FILE_EXTENSION,
    PATCH_COLUMN, STAND_COLUMN, YEAR_COLUMN,
};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Unit of Measure
// =============================================================================

/// A named unit of measure (e.g. "kgC/m2/day", "0-1", "°C")
///
/// Unit names are opaque labels; their syntax is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Unit {
    /// Create a unit from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the unit name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Aggregation Level
// =============================================================================

/// Spatial aggregation level of an output file
///
/// Levels are ordered by containment: Gridcell ⊂ Stand ⊂ Patch ⊂ Individual.
/// A finer level carries the identifier columns of every coarser level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AggregationLevel {
    Gridcell,
    Stand,
    Patch,
    Individual,
}

impl AggregationLevel {
    /// Identifier columns expected for this level, coarsest first
    pub fn structural_columns(self) -> &'static [&'static str] {
        match self {
            AggregationLevel::Gridcell => &[],
            AggregationLevel::Stand => &[STAND_COLUMN],
            AggregationLevel::Patch => &[STAND_COLUMN, PATCH_COLUMN],
            AggregationLevel::Individual => &[STAND_COLUMN, PATCH_COLUMN, INDIVIDUAL_COLUMN],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AggregationLevel::Gridcell => "gridcell",
            AggregationLevel::Stand => "stand",
            AggregationLevel::Patch => "patch",
            AggregationLevel::Individual => "individual",
        }
    }

    /// All levels in containment order
    pub fn all_values() -> [AggregationLevel; 4] {
        [
            AggregationLevel::Gridcell,
            AggregationLevel::Stand,
            AggregationLevel::Patch,
            AggregationLevel::Individual,
        ]
    }
}

impl FromStr for AggregationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "gridcell" => Ok(AggregationLevel::Gridcell),
            "stand" => Ok(AggregationLevel::Stand),
            "patch" => Ok(AggregationLevel::Patch),
            "individual" | "indiv" => Ok(AggregationLevel::Individual),
            _ => Err(Error::configuration(format!(
                "Invalid aggregation level '{}': must be gridcell, stand, patch or individual",
                s
            ))),
        }
    }
}

impl fmt::Display for AggregationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Temporal Resolution
// =============================================================================

/// Temporal resolution of an output file
///
/// Daily and annual files may carry a Day column. Monthly files have one
/// data column per calendar month plus a trailing Total instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalResolution {
    Daily,
    Monthly,
    Annual,
}

impl TemporalResolution {
    /// Whether rows of this resolution may carry a Day column
    pub fn has_day_column(self) -> bool {
        matches!(self, TemporalResolution::Daily | TemporalResolution::Annual)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemporalResolution::Daily => "daily",
            TemporalResolution::Monthly => "monthly",
            TemporalResolution::Annual => "annual",
        }
    }

    pub fn all_values() -> [TemporalResolution; 3] {
        [
            TemporalResolution::Daily,
            TemporalResolution::Monthly,
            TemporalResolution::Annual,
        ]
    }
}

impl FromStr for TemporalResolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(TemporalResolution::Daily),
            "monthly" => Ok(TemporalResolution::Monthly),
            "annual" | "yearly" => Ok(TemporalResolution::Annual),
            _ => Err(Error::configuration(format!(
                "Invalid temporal resolution '{}': must be daily, monthly or annual",
                s
            ))),
        }
    }
}

impl fmt::Display for TemporalResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata columns of a file with the given level and resolution
///
/// Always Longitude, Latitude and Year; Day for daily and annual output;
/// then the identifier columns of the aggregation level.
pub fn metadata_columns(
    level: AggregationLevel,
    resolution: TemporalResolution,
) -> Vec<&'static str> {
    let mut columns = vec![LONGITUDE_COLUMN, LATITUDE_COLUMN, YEAR_COLUMN];
    if resolution.has_day_column() {
        columns.push(DAY_COLUMN);
    }
    columns.extend_from_slice(level.structural_columns());
    columns
}

// =============================================================================
// Data Point
// =============================================================================

/// A single value of one layer at one gridcell and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub timestamp: DateTime<Utc>,
    pub value: f64,

    /// Stand identifier for stand-level output and finer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stand: Option<u32>,

    /// Patch identifier for patch-level output and finer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<u32>,

    /// Individual identifier for individual-level output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<u32>,
}

impl DataPoint {
    /// Create a gridcell-level point
    pub fn new(longitude: f64, latitude: f64, timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            longitude,
            latitude,
            timestamp,
            value,
            stand: None,
            patch: None,
            individual: None,
        }
    }
}

// =============================================================================
// Series
// =============================================================================

/// Ordered points of one data column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub unit: Unit,
    pub points: Vec<DataPoint>,
}

impl Series {
    pub fn new(name: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            unit,
            points: Vec::new(),
        }
    }

    /// Create a series with room for `capacity` points
    pub fn with_capacity(name: impl Into<String>, unit: Unit, capacity: usize) -> Self {
        Self {
            name: name.into(),
            unit,
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive slices of at most `batch_size` points, in series order
    ///
    /// A zero batch size is treated as one point per batch.
    pub fn batches(&self, batch_size: usize) -> std::slice::Chunks<'_, DataPoint> {
        self.points.chunks(batch_size.max(1))
    }

    /// Earliest and latest timestamps of the series
    pub fn time_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.iter().map(|p| p.timestamp).min()?;
        let last = self.points.iter().map(|p| p.timestamp).max()?;
        Some((first, last))
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// All series parsed from one output file
///
/// Series are kept in header order and are unique by name; adding a series
/// whose name already exists replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub name: String,
    pub description: String,
    pub level: AggregationLevel,
    pub resolution: TemporalResolution,

    /// Label of the file the quantity was parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    series: Vec<Series>,
}

impl Quantity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        level: AggregationLevel,
        resolution: TemporalResolution,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            level,
            resolution,
            source: None,
            series: Vec::new(),
        }
    }

    /// Set the label of the originating file
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Identifier distinguishing this quantity from others of the same type
    ///
    /// The source label without its `.out` extension, or the quantity name
    /// when no source is known.
    pub fn identifier(&self) -> &str {
        match &self.source {
            Some(source) => source
                .strip_suffix(OUTPUT_FILE_EXTENSION)
                .and_then(|s| s.strip_suffix('.'))
                .unwrap_or(source),
            None => &self.name,
        }
    }

    /// Add a series, replacing any existing series with the same name
    pub fn add_series(&mut self, series: Series) {
        match self.series.iter_mut().find(|s| s.name == series.name) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    /// Add a series built from a name, unit and points
    pub fn add(&mut self, name: impl Into<String>, unit: Unit, points: Vec<DataPoint>) {
        self.add_series(Series {
            name: name.into(),
            unit,
            points,
        });
    }

    /// Get a series by name
    pub fn series(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    /// All series in header order
    pub fn all_series(&self) -> &[Series] {
        &self.series
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    pub fn into_series(self) -> Vec<Series> {
        self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(day: u32, value: f64) -> DataPoint {
        DataPoint::new(
            151.25,
            -33.75,
            Utc.with_ymd_and_hms(2000, 1, day, 0, 0, 0).unwrap(),
            value,
        )
    }

    #[test]
    fn test_unit_equality_by_name() {
        assert_eq!(Unit::new("kgC/m2/day"), Unit::from("kgC/m2/day"));
        assert_ne!(Unit::new("kgC/m2"), Unit::new("kgC/m2/day"));
        assert_eq!(Unit::new("°C").to_string(), "°C");
    }

    #[test]
    fn test_aggregation_level_ordering() {
        assert!(AggregationLevel::Gridcell < AggregationLevel::Stand);
        assert!(AggregationLevel::Stand < AggregationLevel::Patch);
        assert!(AggregationLevel::Patch < AggregationLevel::Individual);
    }

    #[test]
    fn test_level_and_resolution_from_str() {
        assert_eq!(
            "Patch".parse::<AggregationLevel>().unwrap(),
            AggregationLevel::Patch
        );
        assert_eq!(
            "indiv".parse::<AggregationLevel>().unwrap(),
            AggregationLevel::Individual
        );
        assert_eq!(
            "monthly".parse::<TemporalResolution>().unwrap(),
            TemporalResolution::Monthly
        );
        assert!("hourly".parse::<TemporalResolution>().is_err());
        assert!("plot".parse::<AggregationLevel>().is_err());
    }

    #[test]
    fn test_metadata_columns_for_every_combination() {
        for level in AggregationLevel::all_values() {
            for resolution in TemporalResolution::all_values() {
                let columns = metadata_columns(level, resolution);

                assert_eq!(&columns[..3], &["Longitude", "Latitude", "Year"]);
                assert_eq!(
                    columns.contains(&"Day"),
                    resolution != TemporalResolution::Monthly
                );
                assert_eq!(
                    columns.contains(&"Stand"),
                    level >= AggregationLevel::Stand
                );
                assert_eq!(
                    columns.contains(&"Patch"),
                    level >= AggregationLevel::Patch
                );
                assert_eq!(
                    columns.contains(&"Individual"),
                    level >= AggregationLevel::Individual
                );

                let expected_len = 3
                    + usize::from(resolution.has_day_column())
                    + level.structural_columns().len();
                assert_eq!(columns.len(), expected_len);
            }
        }
    }

    #[test]
    fn test_quantity_add_replaces_same_name() {
        let mut quantity = Quantity::new(
            "lai",
            "Leaf area index",
            AggregationLevel::Gridcell,
            TemporalResolution::Annual,
        );
        quantity.add("LAI", Unit::new("m2/m2"), vec![point(1, 1.0)]);
        quantity.add("NPP", Unit::new("kgC/m2"), vec![point(1, 2.0)]);
        quantity.add("LAI", Unit::new("m2/m2"), vec![point(1, 3.0), point(2, 4.0)]);

        assert_eq!(quantity.series_names(), vec!["LAI", "NPP"]);
        assert_eq!(quantity.series("LAI").unwrap().len(), 2);
        assert_eq!(quantity.series("LAI").unwrap().points[0].value, 3.0);
        assert_eq!(quantity.point_count(), 3);
        assert!(quantity.series("GPP").is_none());
    }

    #[test]
    fn test_quantity_identifier_prefers_source() {
        let quantity = Quantity::new(
            "Leaf area index",
            "LAI",
            AggregationLevel::Gridcell,
            TemporalResolution::Annual,
        );
        assert_eq!(quantity.identifier(), "Leaf area index");

        let quantity = quantity.with_source("run2/lai.out");
        assert_eq!(quantity.identifier(), "run2/lai");
        assert_eq!(quantity.clone().with_source("lai.txt").identifier(), "lai.txt");
    }

    #[test]
    fn test_series_batches_preserve_order() {
        let mut series = Series::new("LAI", Unit::new("m2/m2"));
        for day in 1..=7 {
            series.push(point(day, day as f64));
        }

        let batches: Vec<_> = series.batches(3).collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].len(), 1);

        let values: Vec<f64> = batches.iter().flat_map(|b| b.iter().map(|p| p.value)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_series_time_range() {
        let mut series = Series::new("LAI", Unit::new("m2/m2"));
        assert!(series.time_range().is_none());

        series.push(point(3, 0.0));
        series.push(point(1, 0.0));
        let (first, last) = series.time_range().unwrap();
        assert_eq!(first, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(last, Utc.with_ymd_and_hms(2000, 1, 3, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_data_point_serialization_skips_missing_ids() {
        let json = serde_json::to_string(&point(1, 2.5)).unwrap();
        assert!(!json.contains("stand"));
        assert!(json.contains("\"value\":2.5"));
    }
}
