//! Tests for individual row parsing

use super::*;
use crate::Error;
use crate::app::services::output_parser::ColumnLayout;
use crate::app::services::output_parser::record_parser::parse_row;
use chrono::{TimeZone, Utc};

fn patch_layout() -> ColumnLayout {
    let columns = record(&[
        "Longitude", "Latitude", "Year", "Day", "Stand", "Patch", "TeBS", "C3G",
    ]);
    ColumnLayout::analyze(&columns, &patch_metadata(), "p.out").unwrap()
}

#[test]
fn test_parse_row_with_identifiers() {
    let fields = record(&["151.25", "-33.75", "2001", "32", "0", "3", "1.5", "0.25"]);
    let row = parse_row(&fields, 2, &patch_layout(), "p.out").unwrap();

    assert_eq!(row.longitude, 151.25);
    assert_eq!(row.latitude, -33.75);
    assert_eq!(row.timestamp, Utc.with_ymd_and_hms(2001, 2, 1, 0, 0, 0).unwrap());
    assert_eq!(row.stand, Some(0));
    assert_eq!(row.patch, Some(3));
    assert_eq!(row.individual, None);
    assert_eq!(row.values, vec![1.5, 0.25]);
}

#[test]
fn test_parse_row_field_count() {
    let fields = record(&["151.25", "-33.75", "2001", "32", "0", "3", "1.5"]);
    let err = parse_row(&fields, 9, &patch_layout(), "p.out").unwrap_err();

    assert!(matches!(
        err,
        Error::ColumnCount {
            row: 9,
            found: 7,
            expected: 8,
            ..
        }
    ));
}

#[test]
fn test_metadata_errors_precede_value_errors() {
    let fields = record(&["151.25", "south", "2001", "32", "0", "3", "x", "0.25"]);
    let err = parse_row(&fields, 4, &patch_layout(), "p.out").unwrap_err();

    assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "Latitude"));
}

#[test]
fn test_invalid_identifier() {
    let fields = record(&["151.25", "-33.75", "2001", "32", "a", "3", "1.5", "0.25"]);
    let err = parse_row(&fields, 4, &patch_layout(), "p.out").unwrap_err();

    match err {
        Error::InvalidField { field, raw, .. } => {
            assert_eq!(field, "Stand");
            assert_eq!(raw, "a");
        }
        other => panic!("Expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_invalid_value_names_column() {
    let fields = record(&["151.25", "-33.75", "2001", "32", "0", "3", "1.5", "--"]);
    let err = parse_row(&fields, 5, &patch_layout(), "p.out").unwrap_err();

    match err {
        Error::InvalidValue { row, column, raw, .. } => {
            assert_eq!(row, 5);
            assert_eq!(column, "C3G");
            assert_eq!(raw, "--");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_year_out_of_range() {
    let fields = record(&["151.25", "-33.75", "999999999", "1", "0", "3", "1.5", "0.25"]);
    let err = parse_row(&fields, 2, &patch_layout(), "p.out").unwrap_err();

    assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "Year"));
}

#[test]
fn test_empty_value_is_invalid() {
    let fields = record(&["151.25", "-33.75", "2001", "32", "0", "3", "1.5", ""]);
    let err = parse_row(&fields, 3, &patch_layout(), "p.out").unwrap_err();

    match err {
        Error::InvalidValue { column, raw, .. } => {
            assert_eq!(column, "C3G");
            assert_eq!(raw, "");
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}
