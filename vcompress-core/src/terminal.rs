//! Terminal output styling for vcompress.
//!
//! All text goes through the `log` facade at info level, so whatever the
//! console shows also lands in the run's log file. Colors are applied only
//! when `NO_COLOR` is unset. The encode spinner draws to stderr and is hidden
//! when stderr is not a terminal.

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::{LazyLock, Mutex};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use crate::utils::format_duration;

/// Represents the visual hierarchy levels in the CLI output
#[derive(Debug, Clone, Copy)]
pub enum OutputLevel {
    /// Main sections (===== SECTION =====)
    Section,
    /// Per-file operations (» Compressing ...)
    Subsection,
    /// Lines belonging to an operation
    Progress,
    /// Key-value status information
    Status,
}

impl OutputLevel {
    fn indent(&self) -> &'static str {
        match self {
            OutputLevel::Section => "",
            OutputLevel::Subsection => "  ",
            OutputLevel::Progress => "    ",
            OutputLevel::Status => "      ",
        }
    }
}

static CURRENT_SPINNER: LazyLock<Mutex<Option<ProgressBar>>> = LazyLock::new(|| Mutex::new(None));

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

fn print_item(level: OutputLevel, symbol: Option<&str>, text: &str, bold: bool) {
    let indent = level.indent();
    let prefix = symbol.map(|s| format!("{s} ")).unwrap_or_default();

    if should_use_color() && bold {
        info!("{indent}{prefix}{}", style(text).bold());
    } else {
        info!("{indent}{prefix}{text}");
    }
}

/// Print a per-file processing step, preceded by a blank line
pub fn print_processing(message: &str) {
    info!("");
    print_item(OutputLevel::Subsection, Some("»"), message, true);
}

/// Print a line under the current processing step
pub fn print_sub_item(message: &str) {
    print_item(OutputLevel::Progress, None, message, false);
}

/// Print a status line (key-value pair).
///
/// Reduction values of 50% and above are shown in green, negative ones in
/// yellow.
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let label_width: usize = 15;
    let padding = label_width.saturating_sub(label.width()).max(1);
    let indent = OutputLevel::Status.indent();

    if !should_use_color() {
        info!("{indent}{label}:{} {value}", " ".repeat(padding));
        return;
    }

    let reduction = label
        .to_lowercase()
        .contains("reduction")
        .then(|| value.strip_suffix('%'))
        .flatten()
        .and_then(|v| v.trim().parse::<f64>().ok());

    let colored_value = match reduction {
        Some(r) if r >= 50.0 => value.green().to_string(),
        Some(r) if r < 0.0 => value.yellow().to_string(),
        _ if highlight => value.bold().to_string(),
        _ => value.to_string(),
    };

    info!("{indent}{label}:{} {colored_value}", " ".repeat(padding));
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        info!("  ⚠ {}", message.yellow());
    } else {
        info!("  ⚠ {message}");
    }
}

/// Print an error message with optional detail lines and a suggestion
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    if should_use_color() {
        info!("  ✗ {}", title.red().bold());
    } else {
        info!("  ✗ {title}");
    }

    for line in message.lines().filter(|l| !l.trim().is_empty()) {
        info!("      {line}");
    }

    if let Some(suggestion_text) = suggestion {
        info!("");
        info!("    Suggestion: {suggestion_text}");
    }
}

fn init_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("    {spinner} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("{label}: starting"));

    if !std::io::stderr().is_terminal() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Starts the encode spinner, replacing any spinner still running.
pub fn start_progress_spinner(label: &str) {
    if let Ok(mut current) = CURRENT_SPINNER.lock() {
        if let Some(old) = current.take() {
            old.finish_and_clear();
        }
        *current = Some(init_spinner(label));
    }
}

/// Shows how much media the encoder has processed so far.
pub fn update_progress_spinner(elapsed_secs: f64) {
    if let Ok(current) = CURRENT_SPINNER.lock() {
        if let Some(pb) = current.as_ref() {
            pb.set_message(format!(
                "Encoded {} ({elapsed_secs:.1}s)",
                format_duration(elapsed_secs)
            ));
        }
    }
}

/// Prints a line above the spinner without it being overdrawn.
pub fn print_above_progress(line: &str) {
    let text = if should_use_color() {
        line.dimmed().to_string()
    } else {
        line.to_string()
    };

    match CURRENT_SPINNER.lock() {
        Ok(current) => match current.as_ref() {
            Some(pb) => pb.suspend(|| info!("{text}")),
            None => info!("{text}"),
        },
        Err(_) => info!("{text}"),
    }
}

/// Removes the spinner from the terminal.
pub fn finish_progress_spinner() {
    if let Ok(mut current) = CURRENT_SPINNER.lock() {
        if let Some(pb) = current.take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_grow_with_depth() {
        assert_eq!(OutputLevel::Section.indent(), "");
        assert!(OutputLevel::Status.indent().len() > OutputLevel::Progress.indent().len());
    }

    #[test]
    fn status_lines_accept_labels_wider_than_the_column() {
        print_status("Size reduction", "42.00%", true);
        print_status("A label far wider than the column", "value", false);
    }

    #[test]
    fn spinner_lifecycle_without_terminal() {
        start_progress_spinner("Encoding");
        update_progress_spinner(12.5);
        print_above_progress("frame=1");
        finish_progress_spinner();

        assert!(CURRENT_SPINNER.lock().unwrap().is_none());
    }
}
