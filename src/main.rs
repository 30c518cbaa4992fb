use clap::Parser;
use guess_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // No subcommand: show help and exit
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(guess_importer::Error::processing_interrupted(
                    "Import interrupted by user",
                )
                .into())
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("GUESS Importer - LPJ-GUESS output to time series");
    println!("================================================");
    println!();
    println!("Import LPJ-GUESS tabular output files and export one time series per");
    println!("data column, tagged with its unit, coordinates and timestamps.");
    println!();
    println!("USAGE:");
    println!("    guess-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import output files and export their series");
    println!("    catalogue   List the known output file types");
    println!("    inspect     Parse one output file and summarize its series");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Import every *.out file of a run:");
    println!("    guess-importer import --input ./run1 --output ./series");
    println!();
    println!("    # Use the instruction file to resolve renamed outputs:");
    println!("    guess-importer import --input ./run1 --instructions ./guess.ins");
    println!();
    println!("    # List monthly file types as JSON:");
    println!("    guess-importer catalogue --format json --filter file_m");
    println!();
    println!("    # Summarize one file:");
    println!("    guess-importer inspect ./run1/lai.out --file-type file_lai");
}
