//! Application configuration loaded from `config.json`.
//!
//! The document lives in the directory named by the `CONFIG_PATH` environment
//! variable. Keys use PascalCase; every key is optional and missing keys fall
//! back to the defaults below. Unknown keys are ignored.

use super::{
    CompressionConfig, DEFAULT_AUDIO_BITRATE, DEFAULT_AUDIO_CODEC, DEFAULT_CODEC, DEFAULT_CRF,
    DEFAULT_FPS, DEFAULT_OUTPUT_EXTENSION, DEFAULT_PRESET,
};
use crate::error::{CoreError, CoreResult};

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable holding the directory that contains the config file.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Name of the configuration document inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AppConfig {
    pub working_dir: PathBuf,
    pub input_dir_name: String,
    pub output_dir_name: String,
    pub ffmpeg_path: String,
    pub default_codec: String,
    pub default_crf: i32,
    pub default_preset: String,
    pub default_fps: Option<u32>,
    pub default_scale: Option<u32>,
    pub default_audio_codec: String,
    pub default_audio_bitrate: String,
    pub default_ext: String,
    pub encoder_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            input_dir_name: "input".to_string(),
            output_dir_name: "output".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            default_codec: DEFAULT_CODEC.to_string(),
            default_crf: DEFAULT_CRF,
            default_preset: DEFAULT_PRESET.to_string(),
            default_fps: Some(DEFAULT_FPS),
            default_scale: None,
            default_audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            default_audio_bitrate: DEFAULT_AUDIO_BITRATE.to_string(),
            default_ext: DEFAULT_OUTPUT_EXTENSION.to_string(),
            encoder_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the directory named by `CONFIG_PATH`.
    ///
    /// A missing variable is a configuration error; so is a missing or
    /// malformed config file.
    pub fn load_from_env() -> CoreResult<Self> {
        Self::load_from_location(std::env::var_os(CONFIG_PATH_ENV))
    }

    fn load_from_location(location: Option<OsString>) -> CoreResult<Self> {
        match location {
            Some(dir) if !dir.is_empty() => Self::load(Path::new(&dir)),
            _ => Err(CoreError::Config(format!(
                "{CONFIG_PATH_ENV} is not defined in environment variables"
            ))),
        }
    }

    /// Loads `config.json` from `config_dir`.
    pub fn load(config_dir: &Path) -> CoreResult<Self> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        log::debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CoreError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Parses a configuration document.
    pub fn from_json(contents: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Directory scanned for input videos.
    #[must_use]
    pub fn input_dir_path(&self) -> PathBuf {
        self.working_dir.join(&self.input_dir_name)
    }

    /// Directory receiving compressed videos.
    #[must_use]
    pub fn output_dir_path(&self) -> PathBuf {
        self.working_dir.join(&self.output_dir_name)
    }

    /// Per-file encoder timeout, if configured.
    #[must_use]
    pub fn encoder_timeout(&self) -> Option<Duration> {
        self.encoder_timeout_secs.map(Duration::from_secs)
    }

    /// The compression settings described by the `Default*` keys.
    #[must_use]
    pub fn compression_config(&self) -> CompressionConfig {
        CompressionConfig::builder()
            .codec(&self.default_codec)
            .crf(self.default_crf)
            .preset(&self.default_preset)
            .fps(self.default_fps)
            .scale(self.default_scale)
            .audio_codec(&self.default_audio_codec)
            .audio_bitrate(&self.default_audio_bitrate)
            .output_extension(&self.default_ext)
            .build()
    }
}
