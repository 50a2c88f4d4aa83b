// ============================================================================
// vcompress-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interaction with the Encoder Binary
//
// This module contains everything that touches the external encoder: turning a
// CompressionConfig into an argument vector, and launching and supervising the
// encoder process.
//
// KEY COMPONENTS:
// - ffmpeg_builder: argument construction and command-line rendering
// - ffmpeg_executor: EncoderRunner, ProcessObserver, ProcessOutput

// ============================================================================
// SUBMODULES
// ============================================================================

/// Encoder argument construction
pub mod ffmpeg_builder;

/// Encoder process execution and output streaming
pub mod ffmpeg_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_builder::{build_args, quote_path, render_command_line, VideoFilterChain};
pub use ffmpeg_executor::{
    EncoderRunner, NullObserver, ProcessEvent, ProcessObserver, ProcessOutput,
};
