// vcompress-cli/src/lib.rs
//
// Library portion of the vcompress CLI application.
// Contains argument definitions, command logic and console output.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, CompressArgs};
pub use commands::compress::{resolve_settings, run_compress, CompressOutcome, CompressSettings};
pub use error::{CliResult, EXIT_FATAL, EXIT_FILES_FAILED, EXIT_SUCCESS};
