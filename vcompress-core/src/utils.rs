//! Utility functions for formatting and file operations.
//!
//! This module provides general-purpose helpers used throughout the
//! vcompress-core library: byte and duration formatting, size-reduction math
//! and lenient file size lookup.

use std::io;
use std::path::Path;
use std::time::Duration;

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Formats a wall-clock duration as MM:SS, folding hours into the minutes.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats bytes with binary units (B, KiB, MiB, GiB, TiB) and two decimals.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{size:.2} {}", UNITS[unit])
}

/// Calculates the percentage size reduction from input to output.
///
/// Returns 0 if `input_size` is 0. The value is negative when the output
/// grew.
#[must_use]
pub fn calculate_size_reduction(input_size: u64, output_size: u64) -> f64 {
    if input_size == 0 {
        0.0
    } else {
        (input_size as f64 - output_size as f64) / input_size as f64 * 100.0
    }
}

/// Returns the size of the file at `path`, or 0 when it does not exist.
///
/// Other I/O errors (permissions, broken mounts) are propagated.
pub fn get_file_size(path: &Path) -> io::Result<u64> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e),
    }
}
