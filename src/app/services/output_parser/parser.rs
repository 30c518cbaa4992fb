//! Core output file parser implementation
//!
//! This module provides the parser orchestration: catalogue lookup, file
//! reading, header analysis, row parsing and assembly of the resulting
//! quantity.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::header::ColumnLayout;
use super::record_parser::parse_row;
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize;
use crate::app::models::{DataPoint, Quantity, Series};
use crate::app::services::output_registry::{OutputFileMetadata, OutputFileRegistry};
use crate::config::FieldSeparator;
use crate::{Error, Result};

/// Parser for LPJ-GUESS output files
///
/// Holds a shared, read-only registry; a single parser can serve any number
/// of concurrent parses.
#[derive(Debug, Clone)]
pub struct OutputFileParser {
    registry: Arc<OutputFileRegistry>,
    separator: FieldSeparator,
}

impl OutputFileParser {
    /// Create a tab-delimited parser backed by the given registry
    pub fn new(registry: Arc<OutputFileRegistry>) -> Self {
        Self {
            registry,
            separator: FieldSeparator::Tab,
        }
    }

    /// Use a different field separator
    pub fn with_separator(mut self, separator: FieldSeparator) -> Self {
        self.separator = separator;
        self
    }

    pub fn registry(&self) -> &OutputFileRegistry {
        &self.registry
    }

    /// Parse already-decoded file content of the given file type
    ///
    /// `source` names the file in error messages.
    pub fn parse_str(&self, file_type: &str, content: &str, source: &str) -> Result<ParseResult> {
        let metadata = self.registry.get_metadata(file_type)?;
        parse_content(content, metadata, self.separator, source)
    }

    /// Read and parse an output file of the given file type
    pub async fn parse_file(&self, file_type: &str, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing {} as {}", file_path.display(), file_type);

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        let source = file_path.display().to_string();
        self.parse_str(file_type, &content, &source)
    }
}

/// Parse file content into a quantity with one series per data column
///
/// Blank lines are skipped. Row numbers in errors are 1-based line numbers
/// of the content, so the header is row 1.
///
/// Rows without a Day column are stamped with day 365, i.e. Jan 1 plus 364
/// days: Dec 31 in common years but Dec 30 in leap years such as 2000, where
/// the documented example names 2000-12-31.
pub fn parse_content(
    content: &str,
    metadata: &OutputFileMetadata,
    separator: FieldSeparator,
    source: &str,
) -> Result<ParseResult> {
    let mut stats = ParseStats::new();

    let tokenized = tokenize(content, separator, source)?;
    stats.blank_lines = tokenized.blank_lines;
    let lines = tokenized.records;

    if lines.len() < 2 {
        return Err(Error::insufficient_data(source));
    }

    let (_, header) = &lines[0];
    let layout = ColumnLayout::analyze(header, metadata, source)?;
    debug!(
        "Header of {}: {} columns, data columns {:?}",
        source,
        layout.column_count,
        layout.data_column_names()
    );

    let data_lines = &lines[1..];
    let mut series: Vec<Series> = layout
        .data_columns
        .iter()
        .map(|c| Series::with_capacity(c.name.clone(), c.unit.clone(), data_lines.len()))
        .collect();

    for (row, fields) in data_lines {
        let parsed = parse_row(fields, *row, &layout, source)?;

        for (target, value) in series.iter_mut().zip(&parsed.values) {
            target.push(DataPoint {
                longitude: parsed.longitude,
                latitude: parsed.latitude,
                timestamp: parsed.timestamp,
                value: *value,
                stand: parsed.stand,
                patch: parsed.patch,
                individual: parsed.individual,
            });
        }
        stats.data_rows += 1;
    }

    let mut quantity = Quantity::new(
        metadata.name(),
        metadata.description(),
        metadata.level(),
        metadata.resolution(),
    )
    .with_source(source);
    for s in series {
        quantity.add_series(s);
    }

    stats.data_columns = layout.data_columns.len();
    stats.points = quantity.point_count();
    stats.day_defaulted = layout.day.is_none();

    debug!(
        "Parsed {} rows into {} series ({} points) from {}",
        stats.data_rows, stats.data_columns, stats.points, source
    );

    Ok(ParseResult { quantity, stats })
}
