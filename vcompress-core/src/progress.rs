//! Encoder progress parsing.
//!
//! ffmpeg reports progress on stderr with status lines such as
//! `frame=  100 fps= 25 ... time=00:01:05.20 bitrate= 812.3kbits/s speed=1.1x`.
//! Only the `time=` field is used; it gives the amount of media encoded so far.

use regex::Regex;
use std::sync::LazyLock;

static PROGRESS_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"time=(\d{2,}):(\d{2}):(\d{2}\.\d+)").expect("progress regex is valid")
});

/// Extracts elapsed media time, in seconds, from an encoder output line.
///
/// Returns `None` for lines without a `time=HH:MM:SS.ff` marker, which is the
/// common case and not an error. Hour fields too large to represent also
/// yield `None`.
///
/// # Examples
///
/// ```rust
/// use vcompress_core::parse_progress;
///
/// let line = "frame=100 time=00:01:05.20 bitrate=812.3kbits/s";
/// assert_eq!(parse_progress(line), Some(65.2));
/// assert_eq!(parse_progress("Stream mapping:"), None);
/// ```
#[must_use]
pub fn parse_progress(line: &str) -> Option<f64> {
    let captures = PROGRESS_TIME_RE.captures(line)?;

    let hours: u64 = captures.get(1)?.as_str().parse().ok()?;
    let minutes: u64 = captures.get(2)?.as_str().parse().ok()?;
    let seconds: f64 = captures.get(3)?.as_str().parse().ok()?;

    let whole_seconds = hours.checked_mul(3600)?.checked_add(minutes * 60)?;
    Some(whole_seconds as f64 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_status_line() {
        let line = "frame=100 time=00:01:05.20 bitrate=...";
        assert_eq!(parse_progress(line), Some(65.2));
    }

    #[test]
    fn parses_full_ffmpeg_status_line() {
        let line = "frame= 1000 fps= 25 q=29.0 size=   12345kB time=01:30:45.75 bitrate=1000.0kbits/s speed=1.5x";
        assert_eq!(parse_progress(line), Some(5445.75));
    }

    #[test]
    fn uses_first_marker() {
        let line = "time=00:00:01.50 time=00:00:09.00";
        assert_eq!(parse_progress(line), Some(1.5));
    }

    #[test]
    fn ignores_lines_without_marker() {
        assert_eq!(parse_progress(""), None);
        assert_eq!(parse_progress("Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'in.mp4':"), None);
        assert_eq!(parse_progress("frame=  0 fps=0.0 q=0.0 size=0kB time=N/A bitrate=N/A"), None);
    }

    #[test]
    fn requires_fractional_seconds() {
        assert_eq!(parse_progress("time=00:01:05"), None);
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert_eq!(parse_progress("TIME=00:01:05.20"), None);
        assert_eq!(parse_progress("Time=00:01:05.20"), None);
    }

    #[test]
    fn oversized_hours_are_ignored() {
        assert_eq!(parse_progress("frame=1 time=9999999999999999:00:00.00 bitrate=N/A"), None);
        assert_eq!(parse_progress("time=99999999999999999999999:00:00.00"), None);
        assert_eq!(parse_progress("time=100:00:00.50"), Some(360_000.5));
    }

    #[test]
    fn requires_two_digit_minutes() {
        assert_eq!(parse_progress("time=00:1:05.20"), None);
    }
}
