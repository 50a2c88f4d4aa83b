//! Conversion orchestration.
//!
//! [`compress`] handles a single file; [`batch`] runs a list of files through
//! a [`Compressor`] sequentially and aggregates the results.

/// Single-file conversion
pub mod compress;

/// Sequential batch conversion and summary
pub mod batch;

pub use batch::{batch_output_path, process_videos, BatchReporter, BatchSummary, NullReporter};
pub use compress::Compressor;
