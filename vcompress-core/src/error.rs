//! Error types for the vcompress-core library.
//!
//! A non-zero encoder exit is an expected outcome and is normally carried as a
//! [`CompressionResult::Failure`](crate::CompressionResult). `CoreError` is the
//! channel for everything else: configuration problems, filesystem errors and
//! failures to start or supervise the encoder process. The one exception is
//! [`CoreError::CompressionFailed`], which [`Compressor::compress`](crate::Compressor::compress)
//! uses to surface a failed conversion to callers that want `?` semantics.

use crate::results::CompressionFailure;

use std::time::Duration;
use thiserror::Error;

/// Custom error types for vcompress-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("No processable video files found")]
    NoFilesFound,

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Failed waiting for {0}: {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("{0} timed out after {1:?}")]
    Timeout(String, Duration),

    #[error("Compression failed: {0}")]
    CompressionFailed(Box<CompressionFailure>),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vcompress-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl From<CompressionFailure> for CoreError {
    fn from(failure: CompressionFailure) -> Self {
        CoreError::CompressionFailed(Box::new(failure))
    }
}
