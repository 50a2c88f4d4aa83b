// vcompress-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "vcompress: batch video compression",
    long_about = "Compresses every video in an input directory with ffmpeg and reports the size reduction."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug-level logging; also echoes encoder output
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Do not write a log file for this run
    #[arg(long, global = true, default_value_t = false)]
    pub no_log: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compresses all video files in the configured input directory
    Compress(CompressArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CompressArgs {
    /// Directory containing config.json
    #[arg(long, value_name = "DIR", env = "CONFIG_PATH")]
    pub config_dir: Option<PathBuf>,

    /// Input directory (overrides WorkingDir/InputDirName)
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Output directory (overrides WorkingDir/OutputDirName)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Encoder binary
    #[arg(long = "ffmpeg", value_name = "PATH")]
    pub ffmpeg_path: Option<String>,

    // --- Compression Overrides ---
    /// Video codec (e.g. libx265, libx264)
    #[arg(long, value_name = "CODEC")]
    pub codec: Option<String>,

    /// Constant Rate Factor
    #[arg(long, value_name = "CRF", allow_negative_numbers = true)]
    pub crf: Option<i32>,

    /// Encoder speed/quality preset
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Output frame rate
    #[arg(long, value_name = "FPS", conflicts_with = "no_fps")]
    pub fps: Option<u32>,

    /// Keep the source frame rate
    #[arg(long, default_value_t = false)]
    pub no_fps: bool,

    /// Output height in pixels; width follows the aspect ratio
    #[arg(long, value_name = "HEIGHT")]
    pub scale: Option<u32>,

    /// Audio handling: aac, opus, copy or none
    #[arg(long, value_name = "MODE")]
    pub audio: Option<String>,

    /// Audio bitrate for aac/opus (e.g. 128k)
    #[arg(long, value_name = "RATE")]
    pub audio_bitrate: Option<String>,

    /// Extension for outputs written next to their input
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Kill the encoder after this many seconds per file
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
