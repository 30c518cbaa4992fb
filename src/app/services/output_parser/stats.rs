//! Parsing statistics and result structures

use crate::app::models::Quantity;

/// Statistics from parsing one output file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Data rows parsed (excluding the header)
    pub data_rows: usize,

    /// Data columns found in the header
    pub data_columns: usize,

    /// Points emitted across all series
    pub points: usize,

    /// Blank lines ignored
    pub blank_lines: usize,

    /// The header had no Day column, so every row used the default day
    pub day_defaulted: bool,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Result of parsing one output file
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub quantity: Quantity,
    pub stats: ParseStats,
}
