//! Core library for batch video compression with an external encoder.
//!
//! This crate builds ffmpeg command lines from a [`CompressionConfig`], runs
//! the encoder as a child process while streaming its output, parses progress
//! from its status lines and turns each run into a [`CompressionResult`] with
//! size-reduction statistics.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use vcompress_core::{AppConfig, Compressor, NullObserver, NullReporter};
//! use vcompress_core::{find_processable_files, process_videos};
//!
//! # async fn demo() -> vcompress_core::CoreResult<()> {
//! let app_config = AppConfig::load_from_env()?;
//! let files = find_processable_files(&app_config.input_dir_path())?;
//!
//! let compressor = Compressor::from_app_config(&app_config);
//! let summary = process_videos(
//!     &compressor,
//!     &files,
//!     &app_config.output_dir_path(),
//!     &NullObserver,
//!     &NullReporter,
//! )
//! .await?;
//!
//! println!("{} of {} files compressed", summary.success_count(), files.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod file_logging;
pub mod processing;
pub mod progress;
pub mod results;
pub mod terminal;
pub mod utils;

// Re-exports for public API
pub use config::{AppConfig, AudioMode, CompressionConfig, CompressionConfigBuilder};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{EncoderRunner, NullObserver, ProcessEvent, ProcessObserver, ProcessOutput};
pub use processing::{
    batch_output_path, process_videos, BatchReporter, BatchSummary, Compressor, NullReporter,
};
pub use progress::parse_progress;
pub use results::{CompressionFailure, CompressionResult, CompressionSuccess};
pub use utils::{calculate_size_reduction, format_bytes, format_duration, format_elapsed};
