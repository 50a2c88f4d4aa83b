// ============================================================================
// vcompress-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Logger setup for a CLI run
//
// The console always receives log output. Unless --no-log is given, a
// timestamped log file is also written to `<output dir>/logs`.

use crate::error::CliResult;

use log::LevelFilter;
use std::path::{Path, PathBuf};
use vcompress_core::file_logging::{get_timestamp, log_file_name, setup_logging};
use vcompress_core::CoreError;

/// Log level for the run.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Path of this run's log file inside `output_dir`.
pub fn log_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join("logs").join(log_file_name(&get_timestamp()))
}

/// Installs the logger and returns the log file path, if one is written.
pub fn init_logging(output_dir: &Path, no_log: bool, verbose: bool) -> CliResult<Option<PathBuf>> {
    let log_file = (!no_log).then(|| log_file_path(output_dir));

    setup_logging(log_file.as_deref(), log_level(verbose))
        .map_err(|e| CoreError::OperationFailed(format!("Failed to set up logging: {e:#}")))?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_output_logs() {
        let path = log_file_path(Path::new("/videos/output"));
        assert_eq!(path.parent(), Some(Path::new("/videos/output/logs")));

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("vcompress_run_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn verbose_switches_to_debug() {
        assert_eq!(log_level(true), LevelFilter::Debug);
        assert_eq!(log_level(false), LevelFilter::Info);
    }
}
