// vcompress-cli/src/main.rs
//
// Entry point for the vcompress binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Loading configuration and applying overrides.
// - Setting up console and file logging.
// - Running the requested command and mapping its outcome to an exit code.

use clap::Parser;
use log::info;
use std::process;

use vcompress_cli::logging::init_logging;
use vcompress_cli::{
    resolve_settings, run_compress, Cli, Commands, CompressOutcome, EXIT_FATAL,
    EXIT_FILES_FAILED, EXIT_SUCCESS,
};
use vcompress_core::terminal;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    match cli.command {
        Commands::Compress(args) => {
            // Logging depends on the output directory, so configuration
            // errors are reported directly on stderr.
            let settings = match resolve_settings(&args) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return EXIT_FATAL;
                }
            };

            let log_file = match init_logging(&settings.output_dir, cli.no_log, cli.verbose) {
                Ok(log_file) => log_file,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return EXIT_FATAL;
                }
            };
            if let Some(path) = &log_file {
                info!("Log file: {}", path.display());
            }

            match run_compress(&settings, cli.verbose).await {
                Ok(CompressOutcome::NothingToDo) => EXIT_SUCCESS,
                Ok(CompressOutcome::Completed(summary)) if summary.all_succeeded() => EXIT_SUCCESS,
                Ok(CompressOutcome::Completed(_)) => EXIT_FILES_FAILED,
                Err(e) => {
                    terminal::print_error("Compression aborted", &e.to_string(), None);
                    EXIT_FATAL
                }
            }
        }
    }
}
