//! Inspect command implementation
//!
//! Parses a single output file and prints one line per series with its
//! unit, point count and covered time range.

use crate::app::services::file_type_resolver::FileTypeResolver;
use crate::app::services::output_parser::{OutputFileParser, ParseResult};
use crate::app::services::output_registry::OutputFileRegistry;
use crate::cli::args::InspectArgs;
use crate::config::FieldSeparator;
use anyhow::{Context, Result, anyhow};
use colored::*;
use std::sync::Arc;
use tracing::info;

/// Inspect command runner
pub async fn run_inspect(args: &InspectArgs) -> Result<ParseResult> {
    let registry = Arc::new(OutputFileRegistry::builtin().context("Failed to build catalogue")?);

    let file_type = match &args.file_type {
        Some(key) => key.clone(),
        None => FileTypeResolver::new(&registry)
            .resolve(&args.file)
            .map(str::to_string)
            .ok_or_else(|| {
                anyhow!(
                    "Cannot determine the file type of {}; pass --file-type",
                    args.file.display()
                )
            })?,
    };
    info!("Inspecting {} as {}", args.file.display(), file_type);

    let separator = if args.whitespace {
        FieldSeparator::Whitespace
    } else {
        FieldSeparator::Tab
    };
    let parser = OutputFileParser::new(registry).with_separator(separator);
    let result = parser
        .parse_file(&file_type, &args.file)
        .await
        .with_context(|| format!("Failed to parse {}", args.file.display()))?;

    print_report(&file_type, &result);
    Ok(result)
}

fn print_report(file_type: &str, result: &ParseResult) {
    let quantity = &result.quantity;

    println!(
        "{} ({}, {} {})",
        quantity.name.bright_green().bold(),
        file_type,
        quantity.level,
        quantity.resolution
    );
    println!("  {}", quantity.description);
    println!(
        "  {} rows, {} series, {} points{}",
        result.stats.data_rows,
        result.stats.data_columns,
        result.stats.points,
        if result.stats.day_defaulted {
            " (no Day column, day 365 assumed)"
        } else {
            ""
        }
    );
    println!();

    let name_width = quantity
        .series_names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(0);
    for series in quantity.all_series() {
        let range = match series.time_range() {
            Some((first, last)) => format!(
                "{} .. {}",
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ),
            None => "-".to_string(),
        };
        println!(
            "  {:<name_width$}  {:>8} points  {:<14}  {}",
            series.name.bright_cyan(),
            series.len(),
            series.unit.to_string(),
            range
        );
    }
}
