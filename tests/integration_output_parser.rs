//! Integration tests for the output parser against the built-in catalogue
//!
//! These tests write LPJ-GUESS style output files to a temporary directory
//! and verify end-to-end parsing through the public API.

use chrono::{Datelike, TimeZone, Utc};
use guess_importer::app::services::output_parser::OutputFileParser;
use guess_importer::app::services::output_registry::OutputFileRegistry;
use guess_importer::config::FieldSeparator;
use guess_importer::{AggregationLevel, Error, TemporalResolution};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn parser() -> OutputFileParser {
    OutputFileParser::new(Arc::new(
        OutputFileRegistry::builtin().expect("built-in catalogue should be valid"),
    ))
}

fn write_file(dir: &TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let content: String = rows.iter().map(|r| r.replace(' ', "\t") + "\n").collect();
    std::fs::write(&path, content).unwrap();
    path
}

/// Parse a per-PFT annual gridcell file
///
/// Purpose: Validate the most common output shape, one column per PFT plus Total
#[tokio::test]
async fn test_parse_annual_pft_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "cmass.out",
        &[
            "Longitude Latitude Year BNE TeBS C3G Total",
            "-0.25 51.25 1901 0.000 5.120 0.210 5.330",
            "-0.25 51.25 1902 0.000 5.260 0.190 5.450",
            "10.75 60.25 1901 3.400 0.000 0.100 3.500",
        ],
    );

    let result = parser().parse_file("file_cmass", &path).await.unwrap();
    let quantity = &result.quantity;

    assert_eq!(quantity.level, AggregationLevel::Gridcell);
    assert_eq!(quantity.resolution, TemporalResolution::Annual);
    assert_eq!(quantity.series_names(), vec!["BNE", "TeBS", "C3G", "Total"]);
    assert!(quantity.all_series().iter().all(|s| s.len() == 3));
    assert!(quantity.all_series().iter().all(|s| s.unit.name() == "kgC/m2"));

    let total = quantity.series("Total").unwrap();
    assert_eq!(total.points[2].longitude, 10.75);
    assert_eq!(total.points[2].value, 3.5);
    assert_eq!(
        total.points[0].timestamp,
        Utc.with_ymd_and_hms(1901, 12, 31, 0, 0, 0).unwrap()
    );
    assert!(result.stats.day_defaulted);
}

/// Parse a monthly file whose columns are fixed by the catalogue
#[tokio::test]
async fn test_parse_monthly_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mlai.out",
        &[
            "Longitude Latitude Year Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec",
            "151.25 -33.75 2000 1 1 1 2 2 2 3 3 3 2 2 1",
        ],
    );

    let result = parser().parse_file("file_mlai", &path).await.unwrap();
    assert_eq!(result.quantity.resolution, TemporalResolution::Monthly);
    assert_eq!(result.quantity.series_count(), 12);
    assert_eq!(result.quantity.series("Jul").unwrap().points[0].value, 3.0);
}

/// A monthly file with an extra column is rejected rather than guessed at
#[tokio::test]
async fn test_monthly_file_with_unknown_column() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "mlai.out",
        &["Longitude Latitude Year Jan Extra", "151.25 -33.75 2000 1 2"],
    );

    let err = parser().parse_file("file_mlai", &path).await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedColumn { ref column, .. } if column == "Extra"));
}

/// Daily patch-level output keeps stand and patch identifiers
#[tokio::test]
async fn test_parse_daily_patch_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "dave_lai.out",
        &[
            "Longitude Latitude Year Day Stand Patch TeBS C3G",
            "16.25 56.25 2001 0 0 0 0.1 0.2",
            "16.25 56.25 2001 0 0 1 0.3 0.4",
        ],
    );

    // Day 0 is outside 1..=366
    let err = parser().parse_file("file_dave_lai", &path).await.unwrap_err();
    assert!(matches!(err, Error::InvalidField { ref field, row: 2, .. } if field == "Day"));

    let path = write_file(
        &dir,
        "dave_lai.out",
        &[
            "Longitude Latitude Year Day Stand Patch TeBS C3G",
            "16.25 56.25 2001 60 0 0 0.1 0.2",
            "16.25 56.25 2001 60 0 1 0.3 0.4",
        ],
    );
    let result = parser().parse_file("file_dave_lai", &path).await.unwrap();
    let c3g = result.quantity.series("C3G").unwrap();

    assert_eq!(c3g.points[1].patch, Some(1));
    assert_eq!(c3g.points[1].value, 0.4);
    assert_eq!(c3g.points[0].timestamp.month(), 3);
    assert_eq!(c3g.points[0].timestamp.day(), 1);
}

/// Column-aligned files need the whitespace separator
#[tokio::test]
async fn test_column_aligned_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lai.out");
    std::fs::write(
        &path,
        "  Longitude   Latitude   Year    C3G\n      -0.25      51.25   1901  0.210\n",
    )
    .unwrap();

    let result = parser()
        .with_separator(FieldSeparator::Whitespace)
        .parse_file("file_lai", &path)
        .await
        .unwrap();
    assert_eq!(result.quantity.series_names(), vec!["C3G"]);
}
