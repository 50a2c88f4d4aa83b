//! Batch progress and summary output for the console.

use vcompress_core::terminal;
use vcompress_core::utils::{format_bytes, format_elapsed};
use vcompress_core::{BatchReporter, BatchSummary, CompressionResult};

use log::debug;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Number of trailing encoder stderr lines shown for a failed file.
const ERROR_TAIL_LINES: usize = 8;

/// Prints batch progress through the core terminal helpers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The last `max` non-blank lines of an encoder error message.
pub fn error_tail(message: &str, max: usize) -> String {
    let lines: Vec<&str> = message.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(max);
    lines[start..].join("\n")
}

impl BatchReporter for ConsoleReporter {
    fn batch_started(&self, files: &[PathBuf], output_dir: &Path) {
        terminal::print_section("Compression");
        terminal::print_status("Files", &files.len().to_string(), true);
        terminal::print_status("Output", &output_dir.display().to_string(), false);
    }

    fn file_started(&self, index: usize, total: usize, input: &Path) {
        terminal::print_processing(&format!(
            "Compressing {} ({index}/{total})",
            file_name(input)
        ));
        terminal::start_progress_spinner("Encoding");
    }

    fn file_finished(&self, result: &CompressionResult, elapsed: Duration) {
        terminal::finish_progress_spinner();
        debug!("{result}");

        match result {
            CompressionResult::Success(success) => {
                terminal::print_success(&format!(
                    "Compressed {}",
                    file_name(&success.input_file)
                ));
                terminal::print_status("Input size", &format_bytes(success.input_size), false);
                terminal::print_status("Output size", &format_bytes(success.output_size), false);
                terminal::print_status(
                    "Size reduction",
                    &format!("{:.2}%", success.reduction_percent),
                    true,
                );
                terminal::print_status("Duration", &format_elapsed(elapsed), false);
                terminal::print_status("Output", &success.output_file.display().to_string(), false);
            }
            CompressionResult::Failure(failure) => {
                terminal::print_error(
                    &format!("Failed: {}", file_name(&failure.input_file)),
                    &error_tail(&failure.error_message, ERROR_TAIL_LINES),
                    None,
                );
                let exit_code = failure
                    .exit_code
                    .map_or_else(|| "none".to_string(), |code| code.to_string());
                terminal::print_status("Exit code", &exit_code, false);
                terminal::print_status("Duration", &format_elapsed(elapsed), false);
                terminal::print_sub_item(&format!("Command: {}", failure.command_line));
            }
        }
    }

    fn batch_complete(&self, summary: &BatchSummary) {
        terminal::print_section("Final summary");
        terminal::print_status("Total time", &format_elapsed(summary.total_time), false);
        terminal::print_status("Total input", &format_bytes(summary.total_input_size), false);
        terminal::print_status("Total output", &format_bytes(summary.total_output_size), false);
        terminal::print_status(
            "Overall reduction",
            &format!("{:.2}%", summary.overall_reduction_percent()),
            true,
        );
        terminal::print_status("Succeeded", &summary.success_count().to_string(), false);
        terminal::print_status("Failed", &summary.failure_count().to_string(), false);

        if summary.all_succeeded() {
            terminal::print_success("All done!");
        } else {
            terminal::print_warning(&format!(
                "{} of {} file(s) failed",
                summary.failure_count(),
                summary.results.len()
            ));
        }
    }
}
