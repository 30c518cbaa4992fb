//! Shared components for CLI commands
//!
//! This module contains the logging setup, configuration loading, file
//! discovery and statistics shared by the command implementations.

use crate::cli::args::{Args, ImportArgs};
use crate::config::{FieldSeparator, ImportConfig};
use crate::constants::OUTPUT_FILE_EXTENSION;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Import statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Output files found below the input path
    pub files_found: usize,
    /// Files parsed and uploaded
    pub files_imported: usize,
    /// Files that failed to parse or upload
    pub files_failed: usize,
    /// Files whose type could not be resolved
    pub files_unresolved: usize,
    /// Series exported
    pub layers: usize,
    /// Data points exported
    pub points: usize,
    /// Upload batches sent
    pub batches: usize,
    /// Failure messages per file
    pub failures: Vec<(PathBuf, String)>,
    /// Total processing time
    pub processing_time: Duration,
}

impl ImportSummary {
    /// Share of resolved files that imported successfully, in percent
    pub fn success_rate(&self) -> f64 {
        let attempted = self.files_imported + self.files_failed;
        if attempted == 0 {
            0.0
        } else {
            self.files_imported as f64 / attempted as f64 * 100.0
        }
    }

    /// Points exported per second
    pub fn points_per_second(&self) -> f64 {
        let seconds = self.processing_time.as_secs_f64();
        if seconds > 0.0 {
            self.points as f64 / seconds
        } else {
            0.0
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level selected by the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("guess_importer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the import configuration: defaults, then the config file, then flags
pub fn load_import_config(args: &ImportArgs) -> Result<ImportConfig> {
    let mut config = match &args.config_file {
        Some(path) => {
            info!("Using config file: {}", path.display());
            ImportConfig::from_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?
        }
        None => ImportConfig::default(),
    };

    apply_cli_overrides(&mut config, args);
    config.validate().context("Invalid import configuration")?;

    debug!("Import configuration: {:?}", config);
    Ok(config)
}

/// Apply command-line overrides to configuration
pub fn apply_cli_overrides(config: &mut ImportConfig, args: &ImportArgs) {
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    if let Some(max_files) = args.max_concurrent_files {
        config.max_concurrent_files = max_files;
    }
    if let Some(output) = &args.output_path {
        config.output_dir = Some(output.clone());
    }
    if args.fail_fast {
        config.fail_fast = true;
    }
    if args.whitespace {
        config.separator = FieldSeparator::Whitespace;
    }
}

/// Find output files at or below `input`
///
/// A file path is returned as-is; directories are walked recursively for
/// `*.out` files. Results are sorted for a stable processing order.
pub fn discover_output_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", input.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(OUTPUT_FILE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    debug!("Discovered {} output files in {}", files.len(), input.display());
    for file in &files {
        debug!("  Found: {}", file.display());
    }

    Ok(files)
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
