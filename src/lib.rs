//! GUESS Importer Library
//!
//! A Rust library for importing LPJ-GUESS simulation output files and
//! republishing them as structured, layer-per-column time series.
//!
//! This library provides tools for:
//! - A static catalogue of the known output file types and their layer metadata
//! - Classifying header columns into structural metadata and data layers
//! - Parsing tab-delimited output files into quantities of named series
//! - Resolving on-disk file names back to catalogue keys
//! - Uploading parsed quantities to a storage sink in bounded batches

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod file_type_resolver;
        pub mod output_parser;
        pub mod output_registry;
        pub mod uploader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AggregationLevel, DataPoint, Quantity, Series, TemporalResolution, Unit};
pub use app::services::output_parser::OutputFileParser;
pub use app::services::output_registry::{OutputFileMetadata, OutputFileRegistry};
pub use config::ImportConfig;

/// Result type alias for the importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalogue lookup, parsing and upload operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File type key is not in the catalogue
    #[error("Unknown output file type: {key}")]
    UnknownFileType { key: String },

    /// Catalogue registration conflict
    #[error("Catalogue registration error: {message}")]
    Registration { message: String },

    /// File has no header or no data rows
    #[error("Insufficient data in file '{file}': expected a header and at least one data row")]
    InsufficientData { file: String },

    /// Delimited content could not be tokenized
    #[error("CSV parsing error in file '{file}': {source}")]
    CsvParsing {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A header column has an empty name
    #[error("Empty column name at position {position} in header of file '{file}'")]
    EmptyColumn { file: String, position: usize },

    /// A required metadata column is absent from the header
    #[error("Missing required column {column} in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// The same column name appears twice in the header
    #[error("Duplicate column {column} in file '{file}'")]
    DuplicateColumn { file: String, column: String },

    /// A header column is neither metadata nor a data layer of the file type
    #[error("Column {column} in file '{file}' is not a data layer of {file_type}")]
    UnexpectedColumn {
        file: String,
        column: String,
        file_type: String,
    },

    /// Header has no columns beyond the metadata columns
    #[error("No data columns in file '{file}'")]
    NoDataColumns { file: String },

    /// Row field count differs from the header
    #[error("Row {row} of file '{file}' has {found} columns but header has {expected}")]
    ColumnCount {
        file: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A metadata field (coordinate, year, day, structural id) failed to parse
    #[error("Invalid {field} in row {row} of file '{file}': {raw}")]
    InvalidField {
        file: String,
        field: String,
        row: usize,
        raw: String,
    },

    /// A data value failed to parse as a number
    #[error("Invalid value in row {row}, column {column} of file '{file}': {raw}")]
    InvalidValue {
        file: String,
        row: usize,
        column: String,
        raw: String,
    },

    /// Unit lookup for a column that is not a data layer
    #[error("Column {column} is not a data layer")]
    NotADataLayer { column: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Instruction file could not be interpreted
    #[error("Instruction file error in '{file}': {message}")]
    InstructionFile { file: String, message: String },

    /// JSON serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Output location already holds data written in this run
    #[error("Output conflict: {message}")]
    OutputConflict { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an unknown file type error
    pub fn unknown_file_type(key: impl Into<String>) -> Self {
        Self::UnknownFileType { key: key.into() }
    }

    /// Create a catalogue registration error
    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create an insufficient data error
    pub fn insufficient_data(file: impl Into<String>) -> Self {
        Self::InsufficientData { file: file.into() }
    }

    /// Create a CSV tokenizing error
    pub fn csv_parsing(file: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            file: file.into(),
            source,
        }
    }

    /// Create an empty column name error; `position` is 1-based
    pub fn empty_column(file: impl Into<String>, position: usize) -> Self {
        Self::EmptyColumn {
            file: file.into(),
            position,
        }
    }

    /// Create a missing required column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a duplicate column error
    pub fn duplicate_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create an unexpected column error
    pub fn unexpected_column(
        file: impl Into<String>,
        column: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        Self::UnexpectedColumn {
            file: file.into(),
            column: column.into(),
            file_type: file_type.into(),
        }
    }

    /// Create a no data columns error
    pub fn no_data_columns(file: impl Into<String>) -> Self {
        Self::NoDataColumns { file: file.into() }
    }

    /// Create a row column-count mismatch error
    pub fn column_count(file: impl Into<String>, row: usize, found: usize, expected: usize) -> Self {
        Self::ColumnCount {
            file: file.into(),
            row,
            found,
            expected,
        }
    }

    /// Create an invalid metadata field error
    pub fn invalid_field(
        file: impl Into<String>,
        field: impl Into<String>,
        row: usize,
        raw: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            file: file.into(),
            field: field.into(),
            row,
            raw: raw.into(),
        }
    }

    /// Create an invalid data value error
    pub fn invalid_value(
        file: impl Into<String>,
        row: usize,
        column: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            file: file.into(),
            row,
            column: column.into(),
            raw: raw.into(),
        }
    }

    /// Create a not-a-data-layer error
    pub fn not_a_data_layer(column: impl Into<String>) -> Self {
        Self::NotADataLayer {
            column: column.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an instruction file error
    pub fn instruction_file(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InstructionFile {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create an output conflict error
    pub fn output_conflict(message: impl Into<String>) -> Self {
        Self::OutputConflict {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Whether the error describes malformed file content rather than an
    /// environment or catalogue problem
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::CsvParsing { .. }
                | Self::EmptyColumn { .. }
                | Self::MissingColumn { .. }
                | Self::DuplicateColumn { .. }
                | Self::UnexpectedColumn { .. }
                | Self::NoDataColumns { .. }
                | Self::ColumnCount { .. }
                | Self::InvalidField { .. }
                | Self::InvalidValue { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
