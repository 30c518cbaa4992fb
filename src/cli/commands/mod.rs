//! Command implementations for the GUESS importer CLI
//!
//! Each command is implemented in its own module:
//! - `import`: discovery, concurrent parsing and upload of output files
//! - `catalogue`: listing of the known output file types
//! - `inspect`: parse one file and summarize its series

pub mod catalogue;
pub mod import;
pub mod inspect;
pub mod shared;

pub use shared::ImportSummary;

use crate::cli::args::{Args, Commands};
use anyhow::{Result, bail};

/// Main command runner
///
/// Sets up logging once, then dispatches to the selected subcommand.
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;

    let show_progress = args.show_progress();
    match &args.command {
        Some(Commands::Import(import_args)) => {
            import::run_import(import_args, show_progress).await?;
        }
        Some(Commands::Catalogue(catalogue_args)) => {
            catalogue::run_catalogue(catalogue_args)?;
        }
        Some(Commands::Inspect(inspect_args)) => {
            inspect::run_inspect(inspect_args).await?;
        }
        None => bail!("No command given; run with --help for usage"),
    }

    Ok(())
}
