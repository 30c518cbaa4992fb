//! Command-line argument definitions for the GUESS importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_LOG_LEVEL, MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the GUESS importer
///
/// Imports LPJ-GUESS simulation output files and republishes every data
/// column as a named, unit-tagged time series.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "guess-importer",
    version,
    about = "Import LPJ-GUESS output files as layer-per-column time series",
    long_about = "Reads the tab-delimited output files written by LPJ-GUESS, validates them \
                  against a catalogue of known output file types, and exports one time series \
                  per data column with its unit, coordinates and timestamps."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import output files and export their series
    Import(ImportArgs),
    /// List the known output file types
    Catalogue(CatalogueArgs),
    /// Parse one output file and summarize its series
    Inspect(InspectArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Output file or directory of output files
    ///
    /// Directories are searched recursively for `*.out` files.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Output file or directory to import"
    )]
    pub input_path: PathBuf,

    /// Instruction file declaring output file names
    ///
    /// Lines such as `file_cmass "vegc.out"` map renamed files back to
    /// their file type. Without it, `name.out` is imported as `file_name`.
    #[arg(
        long = "instructions",
        value_name = "FILE",
        help = "Instruction file declaring output file names"
    )]
    pub instructions: Option<PathBuf>,

    /// Directory receiving the exported series
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Directory receiving the exported series"
    )]
    pub output_path: Option<PathBuf>,

    /// Points per upload batch
    #[arg(long = "batch-size", value_name = "N", help = "Points per upload batch")]
    pub batch_size: Option<usize>,

    /// Files parsed concurrently
    #[arg(
        short = 'j',
        long = "max-concurrent-files",
        value_name = "N",
        help = "Maximum number of files parsed concurrently"
    )]
    pub max_concurrent_files: Option<usize>,

    /// Abort on the first failed file
    ///
    /// By default a file that fails to parse is reported and skipped.
    #[arg(long = "fail-fast", help = "Abort on the first failed file")]
    pub fail_fast: bool,

    /// Split fields on runs of whitespace instead of tabs
    #[arg(long = "whitespace", help = "Split fields on whitespace instead of tabs")]
    pub whitespace: bool,

    /// JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,
}

/// Arguments for the catalogue command
#[derive(Debug, Clone, Parser)]
pub struct CatalogueArgs {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: CatalogueFormat,

    /// Only list file types whose key or name contains this text
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Output file to parse
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Catalogue key of the file, e.g. file_cmass
    ///
    /// Resolved from the file name when omitted.
    #[arg(short = 't', long = "file-type", value_name = "KEY")]
    pub file_type: Option<String>,

    /// Split fields on runs of whitespace instead of tabs
    #[arg(long = "whitespace")]
    pub whitespace: bool,
}

/// Output formats of the catalogue listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogueFormat {
    /// Aligned human-readable table
    Table,
    /// JSON array for scripting
    Json,
}

impl Args {
    /// Log level selected by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ImportArgs {
    /// Validate argument consistency before any work starts
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        if let Some(batch_size) = self.batch_size {
            if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&batch_size) {
                return Err(Error::configuration(format!(
                    "Batch size {} must be between {} and {}",
                    batch_size, MIN_BATCH_SIZE, MAX_BATCH_SIZE
                )));
            }
        }

        if self.max_concurrent_files == Some(0) {
            return Err(Error::configuration(
                "Maximum concurrent files must be at least 1",
            ));
        }

        for (label, path) in [
            ("Instruction file", &self.instructions),
            ("Config file", &self.config_file),
        ] {
            if let Some(path) = path {
                if !path.is_file() {
                    return Err(Error::configuration(format!(
                        "{} does not exist: {}",
                        label,
                        path.display()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn import_args(input: PathBuf) -> ImportArgs {
        ImportArgs {
            input_path: input,
            instructions: None,
            output_path: None,
            batch_size: None,
            max_concurrent_files: None,
            fail_fast: false,
            whitespace: false,
            config_file: None,
        }
    }

    #[test]
    fn test_parse_import_command() {
        let args = Args::try_parse_from([
            "guess-importer",
            "-vv",
            "import",
            "--input",
            "run1",
            "--batch-size",
            "100",
            "--fail-fast",
        ])
        .unwrap();

        assert_eq!(args.get_log_level(), "debug");
        match args.command {
            Some(Commands::Import(import)) => {
                assert_eq!(import.input_path, PathBuf::from("run1"));
                assert_eq!(import.batch_size, Some(100));
                assert!(import.fail_fast);
                assert!(!import.whitespace);
            }
            other => panic!("Expected import command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalogue_and_inspect() {
        let args =
            Args::try_parse_from(["guess-importer", "catalogue", "--format", "json"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Catalogue(CatalogueArgs {
                format: CatalogueFormat::Json,
                ..
            }))
        ));

        let args = Args::try_parse_from([
            "guess-importer",
            "inspect",
            "lai.out",
            "--file-type",
            "file_lai",
            "-q",
        ])
        .unwrap();
        assert!(args.quiet);
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["guess-importer", "-q", "-v", "catalogue"]).is_err());
    }

    #[test]
    fn test_default_log_level() {
        let args = Args::try_parse_from(["guess-importer", "catalogue"]).unwrap();
        assert_eq!(args.get_log_level(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_import_args_validation() {
        let temp_dir = TempDir::new().unwrap();

        assert!(import_args(temp_dir.path().to_path_buf()).validate().is_ok());
        assert!(import_args(temp_dir.path().join("missing")).validate().is_err());

        let mut args = import_args(temp_dir.path().to_path_buf());
        args.batch_size = Some(0);
        assert!(args.validate().is_err());

        let mut args = import_args(temp_dir.path().to_path_buf());
        args.max_concurrent_files = Some(0);
        assert!(args.validate().is_err());

        let mut args = import_args(temp_dir.path().to_path_buf());
        args.instructions = Some(temp_dir.path().join("guess.ins"));
        assert!(args.validate().is_err());
    }
}
