// ============================================================================
// vcompress-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CompressionConfig
//
// CompressionConfig is read-only once constructed. This builder is the only way
// to produce a non-default value, either from scratch or by copying an existing
// configuration and overriding a few fields (see CompressionConfig::to_builder).

// ---- Internal crate imports ----
use super::CompressionConfig;

/// Builder for creating CompressionConfig instances.
///
/// Every field starts at its default, so only the overridden values need to
/// be set.
///
/// # Examples
///
/// ```rust
/// use vcompress_core::config::CompressionConfigBuilder;
///
/// let config = CompressionConfigBuilder::new()
///     .codec("libx264")
///     .crf(23)
///     .preset("medium")
///     .fps(Some(24))
///     .scale(Some(1080))
///     .audio_codec("opus")
///     .audio_bitrate("96k")
///     .output_extension(".mkv")
///     .build();
///
/// assert_eq!(config.preset(), "medium");
/// ```
#[derive(Debug, Clone)]
pub struct CompressionConfigBuilder {
    config: CompressionConfig,
}

impl Default for CompressionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CompressionConfig::default(),
        }
    }

    pub(crate) fn from_config(config: CompressionConfig) -> Self {
        Self { config }
    }

    /// Sets the video codec passed to `-c:v`.
    #[must_use]
    pub fn codec(mut self, codec: impl Into<String>) -> Self {
        self.config.codec = codec.into();
        self
    }

    /// Sets the CRF quality value.
    #[must_use]
    pub fn crf(mut self, crf: i32) -> Self {
        self.config.crf = crf;
        self
    }

    /// Sets the encoder preset token (e.g. "slow", "fast").
    #[must_use]
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.config.preset = preset.into();
        self
    }

    /// Sets the output frame rate. `None` leaves the source frame rate alone.
    #[must_use]
    pub fn fps(mut self, fps: Option<u32>) -> Self {
        self.config.fps = fps;
        self
    }

    /// Sets the target height. `None` keeps the source resolution.
    #[must_use]
    pub fn scale(mut self, scale: Option<u32>) -> Self {
        self.config.scale = scale;
        self
    }

    /// Sets the audio codec token ("aac", "opus", "copy", "none").
    #[must_use]
    pub fn audio_codec(mut self, audio_codec: impl Into<String>) -> Self {
        self.config.audio_codec = audio_codec.into();
        self
    }

    /// Sets the audio bitrate (e.g. "128k").
    #[must_use]
    pub fn audio_bitrate(mut self, audio_bitrate: impl Into<String>) -> Self {
        self.config.audio_bitrate = audio_bitrate.into();
        self
    }

    /// Sets the extension used when the output path is derived from the input.
    #[must_use]
    pub fn output_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.output_extension = extension.into();
        self
    }

    /// Builds the CompressionConfig.
    #[must_use]
    pub fn build(self) -> CompressionConfig {
        self.config
    }
}
