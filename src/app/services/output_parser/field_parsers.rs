//! Field parsing utilities for output file rows
//!
//! This module provides helper functions for parsing the typed fields of a
//! data row. Every failure echoes the raw token with its row so the source
//! file can be fixed by hand.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::constants::MAX_DAY_OF_YEAR;
use crate::{Error, Result};

/// Parse a longitude or latitude field
pub fn parse_coordinate(raw: &str, field: &str, row: usize, source: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::invalid_field(source, field, row, raw))
}

/// Parse the Year field
pub fn parse_year(raw: &str, field: &str, row: usize, source: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|_| Error::invalid_field(source, field, row, raw))
}

/// Parse the Day field (1-based day of year)
pub fn parse_day(raw: &str, field: &str, row: usize, source: &str) -> Result<u32> {
    raw.parse::<u32>()
        .ok()
        .filter(|d| (1..=MAX_DAY_OF_YEAR).contains(d))
        .ok_or_else(|| Error::invalid_field(source, field, row, raw))
}

/// Parse a stand, patch or individual identifier
pub fn parse_identifier(raw: &str, field: &str, row: usize, source: &str) -> Result<u32> {
    raw.parse::<u32>()
        .map_err(|_| Error::invalid_field(source, field, row, raw))
}

/// Parse a data value
pub fn parse_value(raw: &str, column: &str, row: usize, source: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::invalid_value(source, row, column, raw))
}

/// Midnight UTC on January 1 of `year`, plus `day - 1` days
///
/// Returns `None` when the date falls outside the representable range.
pub fn day_of_year_timestamp(year: i32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1)?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
}
