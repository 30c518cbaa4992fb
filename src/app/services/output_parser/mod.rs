//! Parser for LPJ-GUESS tabular output files
//!
//! This module turns the text of one output file plus its catalogue metadata
//! into a [`Quantity`](crate::app::models::Quantity) holding one series per
//! data column. Validation is fail-fast: the first structural problem aborts
//! the parse and no partial quantity is returned.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parse orchestration, file reading and series assembly
//! - [`header`] - Header validation and column classification
//! - [`tokenizer`] - Splitting content into records with line numbers
//! - [`record_parser`] - Individual data row processing
//! - [`field_parsers`] - Typed field parsing and timestamp derivation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use guess_importer::app::services::output_parser::OutputFileParser;
//! use guess_importer::app::services::output_registry::OutputFileRegistry;
//!
//! # fn example() -> guess_importer::Result<()> {
//! let registry = Arc::new(OutputFileRegistry::builtin()?);
//! let parser = OutputFileParser::new(registry);
//!
//! let content = "Longitude\tLatitude\tYear\tTeBS\tC3G\n151.25\t-33.75\t2000\t2.5\t0.4\n";
//! let result = parser.parse_str("file_lai", content, "lai.out")?;
//!
//! assert_eq!(result.quantity.series_count(), 2);
//! assert_eq!(result.stats.points, 2);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::{ColumnLayout, DataColumn};
pub use parser::{OutputFileParser, parse_content};
pub use stats::{ParseResult, ParseStats};
