// ============================================================================
// vcompress-core/src/processing/batch.rs
// ============================================================================
//
// BATCH: Sequential Conversion of a File List
//
// process_videos converts each input in order, writing
// `<stem>_compressed<ext>` into the output directory. A file that fails, for
// any reason, is recorded as a failure and the loop moves on; the summary at
// the end covers the whole batch.

use crate::error::CoreResult;
use crate::external::ProcessObserver;
use crate::processing::compress::Compressor;
use crate::results::{CompressionFailure, CompressionResult};
use crate::utils::{calculate_size_reduction, format_bytes, format_elapsed};

use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Hooks for presenting batch progress.
///
/// The default implementations do nothing.
pub trait BatchReporter: Send + Sync {
    fn batch_started(&self, _files: &[PathBuf], _output_dir: &Path) {}

    /// `index` is 1-based.
    fn file_started(&self, _index: usize, _total: usize, _input: &Path) {}

    fn file_finished(&self, _result: &CompressionResult, _elapsed: Duration) {}

    fn batch_complete(&self, _summary: &BatchSummary) {}
}

/// Reporter that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl BatchReporter for NullReporter {}

/// Totals over a finished batch.
///
/// Only successful conversions contribute to the size totals.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub results: Vec<CompressionResult>,
    pub total_input_size: u64,
    pub total_output_size: u64,
    pub total_time: Duration,
}

impl BatchSummary {
    #[must_use]
    pub fn overall_reduction_percent(&self) -> f64 {
        calculate_size_reduction(self.total_input_size, self.total_output_size)
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }

    fn record(&mut self, result: CompressionResult) {
        if let CompressionResult::Success(success) = &result {
            self.total_input_size += success.input_size;
            self.total_output_size += success.output_size;
        }
        self.results.push(result);
    }
}

/// Output path for `input` inside `output_dir`: `<stem>_compressed<ext>`,
/// keeping the input's own extension.
#[must_use]
pub fn batch_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push("_compressed");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    output_dir.join(name)
}

/// Converts `files` one after another into `output_dir`.
///
/// The output directory is created when missing; that is the only error this
/// function returns. Per-file problems end up in the summary as
/// [`CompressionResult::Failure`] entries.
pub async fn process_videos(
    compressor: &Compressor,
    files: &[PathBuf],
    output_dir: &Path,
    observer: &dyn ProcessObserver,
    reporter: &dyn BatchReporter,
) -> CoreResult<BatchSummary> {
    std::fs::create_dir_all(output_dir)?;

    info!(
        "Processing {} file(s) into {}",
        files.len(),
        output_dir.display()
    );
    reporter.batch_started(files, output_dir);

    let batch_start = Instant::now();
    let mut summary = BatchSummary::default();

    for (index, input) in files.iter().enumerate() {
        let output = batch_output_path(input, output_dir);
        reporter.file_started(index + 1, files.len(), input);

        let file_start = Instant::now();
        let result = match compressor.run(input, Some(&output), observer).await {
            Ok(result) => result,
            Err(e) => {
                error!("Could not compress {}: {}", input.display(), e);
                CompressionFailure::from_error(
                    input,
                    &output,
                    compressor.command_line(input, &output),
                    &e,
                )
                .into()
            }
        };
        let elapsed = file_start.elapsed();

        match &result {
            CompressionResult::Success(s) => info!(
                "Finished {} in {} ({:.2}% reduction)",
                input.display(),
                format_elapsed(elapsed),
                s.reduction_percent
            ),
            CompressionResult::Failure(f) => error!(
                "Failed {} after {} (exit code {:?})",
                input.display(),
                format_elapsed(elapsed),
                f.exit_code
            ),
        }

        reporter.file_finished(&result, elapsed);
        summary.record(result);
    }

    summary.total_time = batch_start.elapsed();

    info!(
        "Batch complete: {} succeeded, {} failed, {} -> {} ({:.2}% overall reduction) in {}",
        summary.success_count(),
        summary.failure_count(),
        format_bytes(summary.total_input_size),
        format_bytes(summary.total_output_size),
        summary.overall_reduction_percent(),
        format_elapsed(summary.total_time)
    );
    reporter.batch_complete(&summary);

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::CompressionSuccess;

    #[test]
    fn output_name_keeps_original_extension() {
        assert_eq!(
            batch_output_path(Path::new("/in/Holiday Clip.MOV"), Path::new("/out")),
            PathBuf::from("/out/Holiday Clip_compressed.MOV")
        );
        assert_eq!(
            batch_output_path(Path::new("/in/archive.tar.mkv"), Path::new("/out")),
            PathBuf::from("/out/archive.tar_compressed.mkv")
        );
        assert_eq!(
            batch_output_path(Path::new("/in/noext"), Path::new("/out")),
            PathBuf::from("/out/noext_compressed")
        );
    }

    fn success(input: u64, output: u64) -> CompressionResult {
        CompressionSuccess {
            input_file: PathBuf::from("a.mp4"),
            output_file: PathBuf::from("a_compressed.mp4"),
            command_line: String::new(),
            exit_code: 0,
            input_size: input,
            output_size: output,
            reduction_percent: calculate_size_reduction(input, output),
        }
        .into()
    }

    fn failure() -> CompressionResult {
        CompressionFailure {
            input_file: PathBuf::from("b.mp4"),
            output_file: PathBuf::from("b_compressed.mp4"),
            command_line: String::new(),
            exit_code: Some(1),
            error_message: "boom".to_string(),
        }
        .into()
    }

    #[test]
    fn summary_totals_only_count_successes() {
        let mut summary = BatchSummary::default();
        summary.record(success(1000, 400));
        summary.record(failure());
        summary.record(success(1000, 600));

        assert_eq!(summary.total_input_size, 2000);
        assert_eq!(summary.total_output_size, 1000);
        assert!((summary.overall_reduction_percent() - 50.0).abs() < 1e-9);
        assert_eq!(summary.success_count(), 2);
        assert_eq!(summary.failure_count(), 1);
        assert!(!summary.all_succeeded());
    }

    #[test]
    fn empty_summary() {
        let summary = BatchSummary::default();
        assert_eq!(summary.overall_reduction_percent(), 0.0);
        assert!(summary.all_succeeded());
    }
}
