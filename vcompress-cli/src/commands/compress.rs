//! Implementation of the 'compress' subcommand.
//!
//! Loads the application config, applies command-line overrides, discovers
//! input files and hands them to the core batch driver.

use crate::cli::CompressArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::output::ConsoleReporter;
use crate::progress::ConsoleObserver;

use vcompress_core::terminal;
use vcompress_core::{AppConfig, BatchSummary, Compressor, CoreError};

use log::{debug, info};
use std::path::PathBuf;

/// Everything a compress run needs once configuration is resolved.
#[derive(Debug)]
pub struct CompressSettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub compressor: Compressor,
}

/// How a compress run ended.
#[derive(Debug)]
pub enum CompressOutcome {
    /// Input directory missing or without video files
    NothingToDo,
    Completed(BatchSummary),
}

/// Loads `config.json` from `--config-dir` (or `CONFIG_PATH`).
pub fn load_app_config(args: &CompressArgs) -> CliResult<AppConfig> {
    match &args.config_dir {
        Some(dir) => AppConfig::load(dir),
        None => AppConfig::load_from_env(),
    }
}

/// Applies command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut app: AppConfig, args: &CompressArgs) -> AppConfig {
    if let Some(path) = &args.ffmpeg_path {
        app.ffmpeg_path = path.clone();
    }
    if let Some(codec) = &args.codec {
        app.default_codec = codec.clone();
    }
    if let Some(crf) = args.crf {
        app.default_crf = crf;
    }
    if let Some(preset) = &args.preset {
        app.default_preset = preset.clone();
    }
    if args.no_fps {
        app.default_fps = None;
    } else if let Some(fps) = args.fps {
        app.default_fps = Some(fps);
    }
    if let Some(scale) = args.scale {
        app.default_scale = Some(scale);
    }
    if let Some(audio) = &args.audio {
        app.default_audio_codec = audio.clone();
    }
    if let Some(bitrate) = &args.audio_bitrate {
        app.default_audio_bitrate = bitrate.clone();
    }
    if let Some(ext) = &args.ext {
        app.default_ext = ext.clone();
    }
    if let Some(timeout) = args.timeout {
        app.encoder_timeout_secs = Some(timeout);
    }
    app
}

/// Resolves directories and builds the compressor.
pub fn resolve_settings(args: &CompressArgs) -> CliResult<CompressSettings> {
    let app = apply_overrides(load_app_config(args)?, args);

    Ok(CompressSettings {
        input_dir: args.input_dir.clone().unwrap_or_else(|| app.input_dir_path()),
        output_dir: args.output_dir.clone().unwrap_or_else(|| app.output_dir_path()),
        compressor: Compressor::from_app_config(&app),
    })
}

/// Runs the batch described by `settings`.
pub async fn run_compress(settings: &CompressSettings, verbose: bool) -> CliResult<CompressOutcome> {
    let files = match vcompress_core::find_processable_files(&settings.input_dir) {
        Ok(files) => files,
        Err(CoreError::PathError(message)) => {
            terminal::print_warning(&message);
            return Ok(CompressOutcome::NothingToDo);
        }
        Err(CoreError::NoFilesFound) => {
            terminal::print_warning(&format!(
                "No video files found in {}",
                settings.input_dir.display()
            ));
            return Ok(CompressOutcome::NothingToDo);
        }
        Err(e) => return Err(e),
    };

    settings
        .compressor
        .runner()
        .check_available()
        .await
        .cli_context("Encoder check failed")?;

    let config = settings.compressor.config();
    info!("Input directory: {}", settings.input_dir.display());
    debug!(
        "Settings: codec={} crf={} preset={} fps={:?} scale={:?} audio={} ({})",
        config.codec(),
        config.crf(),
        config.preset(),
        config.fps(),
        config.scale(),
        config.audio_codec(),
        config.audio_bitrate()
    );

    let observer = ConsoleObserver::new(verbose);
    let reporter = ConsoleReporter;
    let summary = vcompress_core::process_videos(
        &settings.compressor,
        &files,
        &settings.output_dir,
        &observer,
        &reporter,
    )
    .await
    .cli_with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            settings.output_dir.display()
        )
    })?;

    Ok(CompressOutcome::Completed(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let args = CompressArgs {
            ffmpeg_path: Some("/opt/ffmpeg".into()),
            codec: Some("libx264".into()),
            crf: Some(20),
            no_fps: true,
            scale: Some(480),
            audio: Some("opus".into()),
            timeout: Some(60),
            ..Default::default()
        };

        let app = apply_overrides(AppConfig::default(), &args);
        let config = app.compression_config();

        assert_eq!(app.ffmpeg_path, "/opt/ffmpeg");
        assert_eq!(config.codec(), "libx264");
        assert_eq!(config.crf(), 20);
        assert_eq!(config.fps(), None);
        assert_eq!(config.scale(), Some(480));
        assert_eq!(config.audio_codec(), "opus");
        assert_eq!(config.preset(), "slow");
        assert_eq!(app.encoder_timeout_secs, Some(60));
    }

    #[test]
    fn fps_override_without_no_fps() {
        let args = CompressArgs {
            fps: Some(24),
            ..Default::default()
        };
        let app = apply_overrides(AppConfig::default(), &args);
        assert_eq!(app.default_fps, Some(24));
    }

    #[cfg(unix)]
    #[test]
    fn settings_use_config_directories_unless_overridden() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            format!(r#"{{ "WorkingDir": "{}" }}"#, dir.path().display()),
        )
        .unwrap();

        let args = CompressArgs {
            config_dir: Some(dir.path().to_path_buf()),
            output_dir: Some(PathBuf::from("/elsewhere")),
            ..Default::default()
        };
        let settings = resolve_settings(&args).unwrap();

        assert_eq!(settings.input_dir, dir.path().join("input"));
        assert_eq!(settings.output_dir, PathBuf::from("/elsewhere"));
        assert_eq!(settings.compressor.runner().encoder_path(), "ffmpeg");
    }
}
