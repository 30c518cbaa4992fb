//! Import command implementation
//!
//! Discovers output files, resolves their file types, parses them
//! concurrently on blocking worker threads and uploads the resulting
//! quantities sequentially through the JSON sink.

use super::shared::{
    ImportSummary, create_progress_bar, discover_output_files, load_import_config,
};
use crate::app::services::file_type_resolver::FileTypeResolver;
use crate::app::services::output_parser::{OutputFileParser, ParseResult};
use crate::app::services::output_registry::OutputFileRegistry;
use crate::app::services::uploader::{
    JsonDirectorySink, QuantitySink, UploadProgress, upload_quantity_with_progress,
};
use crate::cli::args::ImportArgs;
use crate::config::ImportConfig;
use crate::{Error, Result as CrateResult};
use anyhow::{Context, Result};
use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::MultiProgress;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Import command runner
///
/// 1. Load configuration and build the catalogue
/// 2. Discover and resolve output files
/// 3. Parse files concurrently, upload results in discovery order
/// 4. Print a summary
pub async fn run_import(args: &ImportArgs, show_progress: bool) -> Result<ImportSummary> {
    let start_time = Instant::now();

    args.validate()?;
    let config = load_import_config(args)?;
    let output_dir = config.resolved_output_dir()?;

    let registry = Arc::new(OutputFileRegistry::builtin().context("Failed to build catalogue")?);
    info!("Catalogue holds {} output file types", registry.len());

    let resolver = match &args.instructions {
        Some(path) => FileTypeResolver::from_instruction_file(&registry, path)
            .await
            .with_context(|| format!("Failed to read instruction file {}", path.display()))?,
        None => FileTypeResolver::new(&registry),
    };

    let files = discover_output_files(&args.input_path)?;
    let mut summary = ImportSummary {
        files_found: files.len(),
        ..Default::default()
    };

    let mut jobs = Vec::with_capacity(files.len());
    for path in files {
        match resolver.resolve(&path) {
            Some(key) => jobs.push((path, key.to_string())),
            None => {
                warn!("Skipping {}: unknown output file type", path.display());
                summary.files_unresolved += 1;
            }
        }
    }

    info!(
        "Importing {} of {} files into {}",
        jobs.len(),
        summary.files_found,
        output_dir.display()
    );

    let parser = OutputFileParser::new(registry).with_separator(config.separator);
    let mut sink = JsonDirectorySink::new(&output_dir).await?;
    import_files(
        &parser,
        &mut sink,
        &args.input_path,
        jobs,
        &config,
        show_progress,
        &mut summary,
    )
    .await?;

    summary.processing_time = start_time.elapsed();
    if show_progress {
        print_summary(&summary, &output_dir);
    }

    Ok(summary)
}

/// Parse and upload resolved files
///
/// Parsing runs up to `max_concurrent_files` files at once; uploads happen
/// one quantity at a time in the order files were discovered. Each quantity
/// is tagged with its path relative to `input_root`, which keeps files of
/// the same name in different run directories apart in the sink.
pub async fn import_files<S: QuantitySink>(
    parser: &OutputFileParser,
    sink: &mut S,
    input_root: &Path,
    jobs: Vec<(PathBuf, String)>,
    config: &ImportConfig,
    show_progress: bool,
    summary: &mut ImportSummary,
) -> Result<()> {
    let multi = (show_progress && !jobs.is_empty()).then(MultiProgress::new);
    let progress_bar = multi.as_ref().map(|m| {
        m.add(create_progress_bar(
            jobs.len() as u64,
            "Importing output files",
        ))
    });

    let mut results = stream::iter(jobs)
        .map(|(path, key)| {
            let parser = parser.clone();
            async move {
                let task_path = path.clone();
                let outcome =
                    tokio::task::spawn_blocking(move || parse_blocking(&parser, &key, &task_path))
                        .await;
                (path, outcome)
            }
        })
        .buffered(config.max_concurrent_files.max(1));

    while let Some((path, outcome)) = results.next().await {
        let result = outcome
            .with_context(|| format!("Parser task for {} panicked", path.display()))?
            .inspect(|parsed| {
                debug!(
                    "Parsed {}: {} rows, {} series",
                    path.display(),
                    parsed.stats.data_rows,
                    parsed.stats.data_columns
                );
            });

        let upload = match result {
            Ok(parsed) => {
                let quantity = parsed.quantity.with_source(source_label(input_root, &path));
                let progress = match &multi {
                    Some(m) => UploadProgress::new(m, quantity.point_count()),
                    None => UploadProgress::hidden(),
                };
                let uploaded =
                    upload_quantity_with_progress(sink, &quantity, config.batch_size, &progress)
                        .await;
                match &uploaded {
                    Ok(stats) => progress.finish(stats),
                    Err(e) => progress.finish_with_error(&e.to_string()),
                }
                uploaded
            }
            Err(e) => Err(e),
        };

        match upload {
            Ok(stats) => {
                summary.files_imported += 1;
                summary.layers += stats.layers;
                summary.points += stats.points;
                summary.batches += stats.batches;
            }
            Err(e) => {
                summary.files_failed += 1;
                if config.fail_fast {
                    if let Some(pb) = &progress_bar {
                        pb.abandon_with_message("Import aborted");
                    }
                    return Err(anyhow::Error::new(e)
                        .context(format!("Failed to import {}", path.display())));
                }
                error!("Skipping {}: {}", path.display(), e);
                summary.failures.push((path.clone(), e.to_string()));
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Imported {} files, {} points",
            summary.files_imported, summary.points
        ));
    }

    Ok(())
}

/// Path of `path` relative to the import root, or its file name when the
/// root is the file itself
fn source_label(input_root: &Path, path: &Path) -> String {
    match path.strip_prefix(input_root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        ),
    }
}

fn parse_blocking(parser: &OutputFileParser, key: &str, path: &Path) -> CrateResult<ParseResult> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    parser.parse_str(key, &content, &path.display().to_string())
}

fn print_summary(summary: &ImportSummary, output_dir: &Path) {
    println!("\n{}", "Import Summary".bright_green().bold());
    println!(
        "  {} {:.2}s",
        "Time elapsed:".bright_cyan(),
        summary.processing_time.as_secs_f64()
    );
    println!(
        "  {} {}",
        "Files found:".bright_cyan(),
        summary.files_found.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files imported:".bright_cyan(),
        summary.files_imported.to_string().bright_white().bold()
    );
    if summary.files_unresolved > 0 {
        println!(
            "  {} {}",
            "Unknown file types:".bright_yellow(),
            summary.files_unresolved.to_string().bright_yellow()
        );
    }
    if summary.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            summary.files_failed.to_string().bright_red().bold()
        );
        for (path, message) in &summary.failures {
            println!("    {} {}", path.display().to_string().red(), message);
        }
    }
    println!(
        "  {} {} series, {} points ({:.0} points/s)",
        "Exported:".bright_cyan(),
        summary.layers.to_string().bright_white(),
        summary.points.to_string().bright_white().bold(),
        summary.points_per_second()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        output_dir.display().to_string().bright_white()
    );
}
