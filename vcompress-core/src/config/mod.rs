//! Configuration structures and constants for the vcompress-core library.
//!
//! [`CompressionConfig`] describes the encoding parameters for one conversion.
//! It is plain data: values are handed to the argument builder unchecked and
//! the encoder itself rejects anything it does not understand.
//!
//! [`AppConfig`] is the JSON document the CLI loads at startup; it supplies
//! directory locations, the encoder path and the default compression values.

mod app;
mod builder;

use serde::{Deserialize, Serialize};

pub use app::{AppConfig, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
pub use builder::CompressionConfigBuilder;

// Default constants

/// Default video encoder.
pub const DEFAULT_CODEC: &str = "libx265";

/// Default CRF (Constant Rate Factor). Lower values produce higher quality
/// but larger files.
pub const DEFAULT_CRF: i32 = 28;

/// Default encoder speed/quality preset.
pub const DEFAULT_PRESET: &str = "slow";

/// Default output frame rate.
pub const DEFAULT_FPS: u32 = 30;

/// Default audio codec token (see [`AudioMode`]).
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// Default audio bitrate, also used for unrecognized audio codec values.
pub const DEFAULT_AUDIO_BITRATE: &str = "128k";

/// Default extension used when no explicit output path is given.
pub const DEFAULT_OUTPUT_EXTENSION: &str = ".mp4";

/// Pixel format forced on every encode (4:2:0 for broad player support).
pub const PIXEL_FORMAT: &str = "yuv420p";

/// Encoding parameters for a single conversion.
///
/// Construct with [`CompressionConfig::default`] or through
/// [`CompressionConfig::builder`]. Once built the value is read-only; each
/// conversion works from its own clone.
///
/// # Examples
///
/// ```rust
/// use vcompress_core::config::CompressionConfig;
///
/// let config = CompressionConfig::builder()
///     .codec("libx264")
///     .crf(23)
///     .scale(Some(720))
///     .build();
///
/// assert_eq!(config.codec(), "libx264");
/// assert_eq!(config.fps(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub(crate) codec: String,
    pub(crate) crf: i32,
    pub(crate) preset: String,
    pub(crate) fps: Option<u32>,
    pub(crate) scale: Option<u32>,
    pub(crate) audio_codec: String,
    pub(crate) audio_bitrate: String,
    pub(crate) output_extension: String,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            codec: DEFAULT_CODEC.to_string(),
            crf: DEFAULT_CRF,
            preset: DEFAULT_PRESET.to_string(),
            fps: Some(DEFAULT_FPS),
            scale: None,
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }
}

impl CompressionConfig {
    /// Starts a builder seeded with the default values.
    #[must_use]
    pub fn builder() -> CompressionConfigBuilder {
        CompressionConfigBuilder::new()
    }

    /// Starts a builder seeded with this configuration's values.
    #[must_use]
    pub fn to_builder(&self) -> CompressionConfigBuilder {
        CompressionConfigBuilder::from_config(self.clone())
    }

    #[must_use]
    pub fn codec(&self) -> &str {
        &self.codec
    }

    #[must_use]
    pub fn crf(&self) -> i32 {
        self.crf
    }

    #[must_use]
    pub fn preset(&self) -> &str {
        &self.preset
    }

    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    /// Target height in pixels; the width is derived from the aspect ratio.
    #[must_use]
    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    #[must_use]
    pub fn audio_codec(&self) -> &str {
        &self.audio_codec
    }

    #[must_use]
    pub fn audio_bitrate(&self) -> &str {
        &self.audio_bitrate
    }

    #[must_use]
    pub fn output_extension(&self) -> &str {
        &self.output_extension
    }

    /// The audio handling selected by `audio_codec`.
    #[must_use]
    pub fn audio_mode(&self) -> AudioMode {
        AudioMode::parse(&self.audio_codec)
    }
}

/// Audio handling derived from the free-form `audio_codec` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioMode {
    /// Re-encode as AAC at the configured bitrate.
    Aac,
    /// Re-encode as Opus at the configured bitrate.
    Opus,
    /// Stream-copy the audio track.
    Copy,
    /// Drop audio entirely.
    None,
    /// Unrecognized value: AAC at [`DEFAULT_AUDIO_BITRATE`].
    Fallback,
}

impl AudioMode {
    /// Maps an `audio_codec` value to its mode. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "aac" => AudioMode::Aac,
            "opus" => AudioMode::Opus,
            "copy" => AudioMode::Copy,
            "none" => AudioMode::None,
            _ => AudioMode::Fallback,
        }
    }
}
