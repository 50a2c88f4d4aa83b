//! FFmpeg argument construction.
//!
//! Maps an input path, an output path and a [`CompressionConfig`] to the
//! ordered argument list handed to the encoder:
//!
//! ```text
//! -y -i <input> -c:v <codec> -crf <n> -preset <preset> [-vf <filters>]
//!    -pix_fmt yuv420p <audio flags> <output>
//! ```
//!
//! Arguments are passed to the child process as a vector, never through a
//! shell, so paths are emitted verbatim. [`quote_path`] only applies to the
//! human-readable command line attached to results.

use crate::config::{AudioMode, CompressionConfig, DEFAULT_AUDIO_BITRATE, PIXEL_FORMAT};

use std::path::Path;

/// Builder for constructing video filter chains
#[derive(Default)]
pub struct VideoFilterChain {
    filters: Vec<String>,
}

impl VideoFilterChain {
    /// Creates a new empty filter chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `fps=<fps>` filter when a frame rate is set
    #[must_use]
    pub fn add_fps(self, fps: Option<u32>) -> Self {
        match fps {
            Some(fps) => self.add_filter(format!("fps={fps}")),
            None => self,
        }
    }

    /// Adds a `scale=-2:<height>` filter when a target height is set.
    /// `-2` keeps the aspect ratio and rounds the width to an even number.
    #[must_use]
    pub fn add_scale(self, height: Option<u32>) -> Self {
        match height {
            Some(height) => self.add_filter(format!("scale=-2:{height}")),
            None => self,
        }
    }

    /// Adds a custom filter to the chain
    #[must_use]
    pub fn add_filter(mut self, filter: String) -> Self {
        if !filter.is_empty() {
            self.filters.push(filter);
        }
        self
    }

    /// Builds the filter chain into a single filter string
    #[must_use]
    pub fn build(self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(","))
        }
    }
}

/// Audio flags for the configured audio handling.
#[must_use]
pub fn audio_args(config: &CompressionConfig) -> Vec<String> {
    let bitrate = config.audio_bitrate();
    let flags: Vec<&str> = match config.audio_mode() {
        AudioMode::Aac => vec!["-c:a", "aac", "-b:a", bitrate],
        AudioMode::Opus => vec!["-c:a", "libopus", "-b:a", bitrate],
        AudioMode::Copy => vec!["-c:a", "copy"],
        AudioMode::None => vec!["-an"],
        AudioMode::Fallback => vec!["-c:a", "aac", "-b:a", DEFAULT_AUDIO_BITRATE],
    };
    flags.into_iter().map(str::to_string).collect()
}

/// Builds the encoder argument list for one conversion.
///
/// Blank tokens are dropped so an empty config value never turns into a
/// stray empty argument.
///
/// # Examples
///
/// ```rust
/// use vcompress_core::config::CompressionConfig;
/// use vcompress_core::external::ffmpeg_builder::build_args;
/// use std::path::Path;
///
/// let config = CompressionConfig::builder().fps(None).audio_codec("none").build();
/// let args = build_args(Path::new("in.mov"), Path::new("out.mp4"), &config);
///
/// assert_eq!(args.first().map(String::as_str), Some("-y"));
/// assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
/// assert!(!args.iter().any(|a| a == "-vf"));
/// ```
#[must_use]
pub fn build_args(input: &Path, output: &Path, config: &CompressionConfig) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-c:v".to_string(),
        config.codec().to_string(),
        "-crf".to_string(),
        config.crf().to_string(),
        "-preset".to_string(),
        config.preset().to_string(),
    ];

    let filters = VideoFilterChain::new()
        .add_fps(config.fps())
        .add_scale(config.scale())
        .build();
    if let Some(filters) = filters {
        args.push("-vf".to_string());
        args.push(filters);
    }

    args.push("-pix_fmt".to_string());
    args.push(PIXEL_FORMAT.to_string());
    args.extend(audio_args(config));
    args.push(output.to_string_lossy().into_owned());

    args.retain(|arg| !arg.trim().is_empty());
    args
}

/// Wraps a token containing a space in double quotes unless it is already quoted.
#[must_use]
pub fn quote_path(token: &str) -> String {
    if token.contains(' ') && !token.starts_with('"') {
        format!("\"{token}\"")
    } else {
        token.to_string()
    }
}

/// Renders the full command line (`<encoder> <args...>`) for logs and results.
#[must_use]
pub fn render_command_line(encoder: &str, args: &[String]) -> String {
    std::iter::once(quote_path(encoder))
        .chain(args.iter().map(|arg| quote_path(arg)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(config: &CompressionConfig) -> Vec<String> {
        build_args(Path::new("/videos/in.mov"), Path::new("/videos/out.mp4"), config)
    }

    fn filter_value(args: &[String]) -> Option<&str> {
        args.iter()
            .position(|a| a == "-vf")
            .map(|i| args[i + 1].as_str())
    }

    /// The audio segment sits between the pixel format and the output path.
    fn audio_segment(args: &[String]) -> Vec<String> {
        let start = args.iter().position(|a| a == PIXEL_FORMAT).unwrap() + 1;
        args[start..args.len() - 1].to_vec()
    }

    #[test]
    fn default_config_produces_expected_command() {
        let args = args_for(&CompressionConfig::default());
        assert_eq!(
            args,
            vec![
                "-y", "-i", "/videos/in.mov", "-c:v", "libx265", "-crf", "28", "-preset", "slow",
                "-vf", "fps=30", "-pix_fmt", "yuv420p", "-c:a", "aac", "-b:a", "128k",
                "/videos/out.mp4",
            ]
        );
    }

    #[test]
    fn fps_only_filter() {
        let config = CompressionConfig::builder().fps(Some(24)).scale(None).build();
        let args = args_for(&config);

        assert_eq!(filter_value(&args), Some("fps=24"));
        assert_eq!(args.iter().filter(|a| *a == "-vf").count(), 1);
        assert!(!args.iter().any(|a| a.contains("scale=")));
    }

    #[test]
    fn scale_only_filter() {
        let config = CompressionConfig::builder().fps(None).scale(Some(720)).build();
        assert_eq!(filter_value(&args_for(&config)), Some("scale=-2:720"));
    }

    #[test]
    fn fps_and_scale_are_joined() {
        let config = CompressionConfig::builder()
            .fps(Some(30))
            .scale(Some(1080))
            .build();
        assert_eq!(filter_value(&args_for(&config)), Some("fps=30,scale=-2:1080"));
    }

    #[test]
    fn no_filters_omits_flag() {
        let config = CompressionConfig::builder().fps(None).scale(None).build();
        let args = args_for(&config);

        assert!(!args.iter().any(|a| a == "-vf"));
        assert!(!args.iter().any(|a| a.is_empty()));
    }

    #[test]
    fn audio_table() {
        let cases: [(&str, &[&str]); 5] = [
            ("aac", &["-c:a", "aac", "-b:a", "192k"]),
            ("opus", &["-c:a", "libopus", "-b:a", "192k"]),
            ("copy", &["-c:a", "copy"]),
            ("none", &["-an"]),
            ("unknown-value", &["-c:a", "aac", "-b:a", "128k"]),
        ];

        for (codec, expected) in cases {
            let config = CompressionConfig::builder()
                .audio_codec(codec)
                .audio_bitrate("192k")
                .build();
            assert_eq!(audio_segment(&args_for(&config)), expected, "audio codec {codec}");
        }
    }

    #[test]
    fn codec_crf_and_preset_flags() {
        let config = CompressionConfig::builder()
            .codec("libx264")
            .crf(19)
            .preset("veryfast")
            .build();
        let args = args_for(&config);

        let value_after = |flag: &str| {
            let i = args.iter().position(|a| a == flag).unwrap();
            args[i + 1].clone()
        };
        assert_eq!(value_after("-c:v"), "libx264");
        assert_eq!(value_after("-crf"), "19");
        assert_eq!(value_after("-preset"), "veryfast");
        assert_eq!(value_after("-pix_fmt"), "yuv420p");
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let config = CompressionConfig::builder().preset(" ").codec("").build();
        let args = args_for(&config);

        assert!(args.iter().all(|a| !a.trim().is_empty()));
        assert_eq!(args.last().map(String::as_str), Some("/videos/out.mp4"));
    }

    #[test]
    fn paths_with_spaces_are_passed_verbatim() {
        let args = build_args(
            Path::new("/my videos/in file.mov"),
            Path::new("/my videos/out file.mp4"),
            &CompressionConfig::default(),
        );
        assert_eq!(args[2], "/my videos/in file.mov");
        assert_eq!(args.last().unwrap(), "/my videos/out file.mp4");
    }

    #[test]
    fn test_quote_path() {
        assert_eq!(quote_path("/plain/path.mp4"), "/plain/path.mp4");
        assert_eq!(quote_path("/my videos/a.mp4"), "\"/my videos/a.mp4\"");
        assert_eq!(quote_path("\"/my videos/a.mp4\""), "\"/my videos/a.mp4\"");
    }

    #[test]
    fn command_line_quotes_spaced_tokens() {
        let args = vec![
            "-i".to_string(),
            "/my videos/in.mov".to_string(),
            "/out.mp4".to_string(),
        ];
        assert_eq!(
            render_command_line("ffmpeg", &args),
            "ffmpeg -i \"/my videos/in.mov\" /out.mp4"
        );
    }
}
