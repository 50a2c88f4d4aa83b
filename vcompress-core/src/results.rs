//! Outcome records for a single conversion.
//!
//! Every conversion ends in exactly one [`CompressionResult`]: a
//! [`CompressionSuccess`] with size statistics when the encoder exits with 0,
//! or a [`CompressionFailure`] with the encoder's stderr otherwise. Both carry
//! the rendered command line so a failed run can be reproduced by hand.

use crate::error::{CoreError, CoreResult};
use crate::utils::format_bytes;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A conversion whose encoder process exited with status 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionSuccess {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub command_line: String,
    /// Always 0.
    pub exit_code: i32,
    pub input_size: u64,
    pub output_size: u64,
    /// Negative when the output is larger than the input.
    pub reduction_percent: f64,
}

impl fmt::Display for CompressionSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ SUCCESS")?;
        writeln!(
            f,
            "Input:  {} ({})",
            self.input_file.display(),
            format_bytes(self.input_size)
        )?;
        writeln!(
            f,
            "Output: {} ({})",
            self.output_file.display(),
            format_bytes(self.output_size)
        )?;
        writeln!(f, "Reduced: {:.2}%", self.reduction_percent)?;
        writeln!(f, "Command: {}", self.command_line)?;
        write!(f, "Exit Code: {}", self.exit_code)
    }
}

/// A conversion that did not complete.
///
/// Usually the encoder exited non-zero and `error_message` holds its stderr.
/// The batch driver also records spawn errors and timeouts this way, in which
/// case `exit_code` is `None` and the message describes the error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionFailure {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub command_line: String,
    pub exit_code: Option<i32>,
    pub error_message: String,
}

impl CompressionFailure {
    /// Records an error that prevented the encoder from producing an exit code.
    pub fn from_error(
        input_file: &Path,
        output_file: &Path,
        command_line: String,
        error: &CoreError,
    ) -> Self {
        Self {
            input_file: input_file.to_path_buf(),
            output_file: output_file.to_path_buf(),
            command_line,
            exit_code: None,
            error_message: error.to_string(),
        }
    }
}

impl fmt::Display for CompressionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "❌ ERROR")?;
        writeln!(f, "Input: {}", self.input_file.display())?;
        writeln!(f, "Output: {}", self.output_file.display())?;
        writeln!(f, "Command: {}", self.command_line)?;
        match self.exit_code {
            Some(code) => writeln!(f, "Exit Code: {code}")?,
            None => writeln!(f, "Exit Code: none")?,
        }
        write!(f, "Message: {}", self.error_message.trim_end())
    }
}

impl std::error::Error for CompressionFailure {}

/// Outcome of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CompressionResult {
    Success(CompressionSuccess),
    Failure(CompressionFailure),
}

impl CompressionResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, CompressionResult::Success(_))
    }

    #[must_use]
    pub fn input_file(&self) -> &Path {
        match self {
            CompressionResult::Success(s) => &s.input_file,
            CompressionResult::Failure(f) => &f.input_file,
        }
    }

    #[must_use]
    pub fn command_line(&self) -> &str {
        match self {
            CompressionResult::Success(s) => &s.command_line,
            CompressionResult::Failure(f) => &f.command_line,
        }
    }

    /// Converts a failure into [`CoreError::CompressionFailed`].
    pub fn into_result(self) -> CoreResult<CompressionSuccess> {
        match self {
            CompressionResult::Success(success) => Ok(success),
            CompressionResult::Failure(failure) => Err(failure.into()),
        }
    }
}

impl fmt::Display for CompressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionResult::Success(s) => s.fmt(f),
            CompressionResult::Failure(e) => e.fmt(f),
        }
    }
}

impl From<CompressionSuccess> for CompressionResult {
    fn from(success: CompressionSuccess) -> Self {
        CompressionResult::Success(success)
    }
}

impl From<CompressionFailure> for CompressionResult {
    fn from(failure: CompressionFailure) -> Self {
        CompressionResult::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success() -> CompressionSuccess {
        CompressionSuccess {
            input_file: PathBuf::from("/videos/in.mov"),
            output_file: PathBuf::from("/videos/in.mp4"),
            command_line: "ffmpeg -y -i /videos/in.mov /videos/in.mp4".to_string(),
            exit_code: 0,
            input_size: 2048,
            output_size: 512,
            reduction_percent: 75.0,
        }
    }

    fn failure() -> CompressionFailure {
        CompressionFailure {
            input_file: PathBuf::from("/videos/in.mov"),
            output_file: PathBuf::from("/videos/in.mp4"),
            command_line: "ffmpeg -y -i /videos/in.mov /videos/in.mp4".to_string(),
            exit_code: Some(1),
            error_message: "Unknown encoder 'libx999'\n".to_string(),
        }
    }

    #[test]
    fn success_display_block() {
        let text = success().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "✅ SUCCESS");
        assert_eq!(lines[1], "Input:  /videos/in.mov (2.00 KiB)");
        assert_eq!(lines[2], "Output: /videos/in.mp4 (512.00 B)");
        assert_eq!(lines[3], "Reduced: 75.00%");
        assert!(lines[4].starts_with("Command: ffmpeg"));
        assert_eq!(lines[5], "Exit Code: 0");
    }

    #[test]
    fn failure_display_block() {
        let text = failure().to_string();

        assert!(text.starts_with("❌ ERROR\n"));
        assert!(text.contains("Exit Code: 1"));
        assert!(text.ends_with("Message: Unknown encoder 'libx999'"));
    }

    #[test]
    fn into_result_maps_failure_to_error() {
        let ok = CompressionResult::from(success()).into_result().unwrap();
        assert_eq!(ok.output_size, 512);

        match CompressionResult::from(failure()).into_result() {
            Err(CoreError::CompressionFailed(f)) => {
                assert_eq!(f.exit_code, Some(1));
                assert!(f.error_message.contains("libx999"));
            }
            other => panic!("expected CompressionFailed, got {other:?}"),
        }
    }

    #[test]
    fn failure_from_hard_error() {
        let err = CoreError::Timeout("ffmpeg".to_string(), std::time::Duration::from_secs(5));
        let f = CompressionFailure::from_error(
            Path::new("a.mov"),
            Path::new("a.mp4"),
            "ffmpeg -i a.mov a.mp4".to_string(),
            &err,
        );

        assert_eq!(f.exit_code, None);
        assert!(f.error_message.contains("timed out"));
        assert!(f.to_string().contains("Exit Code: none"));
    }

    #[test]
    fn accessors() {
        let result = CompressionResult::from(failure());
        assert!(!result.is_success());
        assert_eq!(result.input_file(), Path::new("/videos/in.mov"));
        assert!(result.command_line().starts_with("ffmpeg"));
    }
}
