// ============================================================================
// vcompress-core/src/processing/compress.rs
// ============================================================================
//
// COMPRESSION: Single-File Orchestration
//
// This module ties the argument builder and the process runner together for
// one input file: it resolves the output path, runs the encoder, and turns the
// exit code and file sizes into a CompressionResult.
//
// WORKFLOW:
// 1. Resolve the output path (explicit, or input with the configured extension)
// 2. Build the argument vector and the printable command line
// 3. Run the encoder, streaming its output to the caller's observer
// 4. Exit 0: measure input and output sizes and compute the reduction
//    Otherwise: record the exit code and stderr as a failure

use crate::config::{AppConfig, CompressionConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_builder::{build_args, render_command_line};
use crate::external::{EncoderRunner, ProcessObserver};
use crate::results::{CompressionFailure, CompressionResult, CompressionSuccess};
use crate::utils::{calculate_size_reduction, format_bytes, get_file_size};

use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Converts video files with an external encoder.
///
/// A `Compressor` owns the encoder location and a snapshot of the
/// compression settings. It holds no per-run state, so one instance can be
/// reused for any number of sequential conversions.
///
/// # Examples
///
/// ```rust,no_run
/// use vcompress_core::{CompressionConfig, Compressor, NullObserver};
/// use std::path::Path;
///
/// # async fn demo() -> vcompress_core::CoreResult<()> {
/// let compressor = Compressor::new("ffmpeg")
///     .with_config(CompressionConfig::builder().crf(30).build());
///
/// let success = compressor
///     .compress(Path::new("holiday.mov"), None, &NullObserver)
///     .await?;
/// println!("{success}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    runner: EncoderRunner,
    config: CompressionConfig,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            runner: EncoderRunner::default(),
            config: CompressionConfig::default(),
        }
    }
}

impl Compressor {
    /// Creates a compressor for `encoder_path` with the default settings.
    #[must_use]
    pub fn new(encoder_path: impl Into<String>) -> Self {
        Self {
            runner: EncoderRunner::new(encoder_path),
            config: CompressionConfig::default(),
        }
    }

    /// Builds a compressor from the application configuration: encoder path,
    /// default compression values and the optional per-file timeout.
    #[must_use]
    pub fn from_app_config(app_config: &AppConfig) -> Self {
        Self::new(app_config.ffmpeg_path.clone())
            .with_config(app_config.compression_config())
            .with_timeout(app_config.encoder_timeout())
    }

    /// Replaces the compression settings used for subsequent conversions.
    #[must_use]
    pub fn with_config(mut self, config: CompressionConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the per-file encoder timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.runner = self.runner.with_timeout(timeout);
        self
    }

    #[must_use]
    pub fn config(&self) -> &CompressionConfig {
        &self.config
    }

    #[must_use]
    pub fn runner(&self) -> &EncoderRunner {
        &self.runner
    }

    /// Returns `output` when given, otherwise `input` with its extension
    /// replaced by the configured output extension.
    ///
    /// An input that already carries the configured extension resolves to
    /// itself; [`Compressor::run`] rejects that pair before the encoder is
    /// started.
    #[must_use]
    pub fn resolve_output_path(&self, input: &Path, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => path.to_path_buf(),
            None => input.with_extension(self.config.output_extension().trim_start_matches('.')),
        }
    }

    /// The printable command line used to convert `input` into `output`.
    #[must_use]
    pub fn command_line(&self, input: &Path, output: &Path) -> String {
        render_command_line(
            self.runner.encoder_path(),
            &build_args(input, output, &self.config),
        )
    }

    /// Converts one file and reports the outcome.
    ///
    /// A non-zero encoder exit is returned as [`CompressionResult::Failure`].
    /// `Err` is reserved for problems outside the encoder's verdict: it could
    /// not be started, it timed out, or the file sizes could not be read.
    /// An output path equal to the input is rejected with
    /// [`CoreError::PathError`](crate::CoreError::PathError).
    pub async fn run(
        &self,
        input: &Path,
        output: Option<&Path>,
        observer: &dyn ProcessObserver,
    ) -> CoreResult<CompressionResult> {
        let output_path = self.resolve_output_path(input, output);
        if output_path.as_path() == input {
            warn!("Refusing to overwrite input {}", input.display());
            return Err(CoreError::PathError(format!(
                "Output path is the same as the input: {}",
                input.display()
            )));
        }
        let args = build_args(input, &output_path, &self.config);
        let command_line = render_command_line(self.runner.encoder_path(), &args);

        info!("Compressing {} -> {}", input.display(), output_path.display());
        debug!("Command: {command_line}");

        let process = self.runner.run(&args, observer).await?;

        if !process.success() {
            warn!(
                "Encoder failed for {} (exit code {:?})",
                input.display(),
                process.exit_code
            );
            return Ok(CompressionFailure {
                input_file: input.to_path_buf(),
                output_file: output_path,
                command_line,
                exit_code: process.exit_code,
                error_message: process.stderr,
            }
            .into());
        }

        let input_size = get_file_size(input)?;
        let output_size = get_file_size(&output_path)?;
        if !output_path.exists() {
            warn!(
                "Encoder exited successfully but {} was not created",
                output_path.display()
            );
        }

        let reduction_percent = calculate_size_reduction(input_size, output_size);
        info!(
            "Compressed {} ({} -> {}, {:.2}% reduction)",
            input.display(),
            format_bytes(input_size),
            format_bytes(output_size),
            reduction_percent
        );

        Ok(CompressionSuccess {
            input_file: input.to_path_buf(),
            output_file: output_path,
            command_line,
            exit_code: 0,
            input_size,
            output_size,
            reduction_percent,
        }
        .into())
    }

    /// Like [`Compressor::run`], but a failed conversion is returned as
    /// [`CoreError::CompressionFailed`](crate::CoreError::CompressionFailed).
    pub async fn compress(
        &self,
        input: &Path,
        output: Option<&Path>,
        observer: &dyn ProcessObserver,
    ) -> CoreResult<CompressionSuccess> {
        self.run(input, output, observer).await?.into_result()
    }
}
