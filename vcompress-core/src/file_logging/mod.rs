//! Logger installation for vcompress runs.
//!
//! Console output and the optional per-run log file are both driven by
//! `log4rs`; everything in the crate writes through the `log` macros.

pub mod setup;

pub use setup::{build_config, setup_logging};

/// Log file name for a run started at `timestamp` (`YYYYMMDD_HHMMSS`).
#[must_use]
pub fn log_file_name(timestamp: &str) -> String {
    format!("vcompress_run_{timestamp}.log")
}

/// Current local time formatted as `YYYYMMDD_HHMMSS`.
#[must_use]
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
