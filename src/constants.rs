//! Application constants for the GUESS importer
//!
//! This module contains the column names, default values and limits
//! used throughout the importer.

// =============================================================================
// Metadata Column Names
// =============================================================================

/// Gridcell longitude column
pub const LONGITUDE_COLUMN: &str = "Longitude";

/// Gridcell latitude column
pub const LATITUDE_COLUMN: &str = "Latitude";

/// Simulation year column
pub const YEAR_COLUMN: &str = "Year";

/// Day-of-year column (1-based), optional in daily and annual output
pub const DAY_COLUMN: &str = "Day";

/// Stand identifier column for stand-level output and finer
pub const STAND_COLUMN: &str = "Stand";

/// Patch identifier column for patch-level output and finer
pub const PATCH_COLUMN: &str = "Patch";

/// Individual identifier column for individual-level output
pub const INDIVIDUAL_COLUMN: &str = "Individual";

// =============================================================================
// Temporal Defaults
// =============================================================================

/// Day-of-year assumed when a file has no Day column.
///
/// Fixed regardless of leap years: in a leap year this lands on December 30.
pub const DEFAULT_DAY_OF_YEAR: u32 = 365;

/// Largest accepted day-of-year value
pub const MAX_DAY_OF_YEAR: u32 = 366;

/// Data columns of monthly output files, in file order
pub const MONTH_COLUMNS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Trailing annual total column of monthly output files
pub const TOTAL_COLUMN: &str = "Total";

// =============================================================================
// File Conventions
// =============================================================================

/// Extension of LPJ-GUESS output files
pub const OUTPUT_FILE_EXTENSION: &str = "out";

/// Prefix shared by every catalogue key
pub const FILE_TYPE_PREFIX: &str = "file_";

/// Field separator of tab-delimited output
pub const TAB_DELIMITER: u8 = b'\t';

// =============================================================================
// Upload Configuration
// =============================================================================

/// Default number of points sent per batch
pub const DEFAULT_BATCH_SIZE: usize = 5_000;

/// Smallest batch size accepted by configuration validation
pub const MIN_BATCH_SIZE: usize = 1;

/// Largest batch size accepted by configuration validation
pub const MAX_BATCH_SIZE: usize = 100_000;

/// File holding the quantity record in the JSON sink output
pub const QUANTITY_RECORD_FILE: &str = "quantity.json";

/// Extension of per-layer point files in the JSON sink output
pub const LAYER_FILE_EXTENSION: &str = "jsonl";

/// Directory name used below the user data directory for default output
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "guess-importer";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither verbose nor quiet is requested
pub const DEFAULT_LOG_LEVEL: &str = "warn";
