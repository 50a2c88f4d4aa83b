// ============================================================================
// vcompress-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Encoder output on the console
//
// ConsoleObserver receives the encoder's output while a file is being
// compressed. Progress updates drive the spinner started by the reporter;
// raw encoder lines are only shown with --verbose.

use vcompress_core::terminal;
use vcompress_core::ProcessObserver;

/// Console observer for a single encoder run at a time.
#[derive(Debug, Clone, Default)]
pub struct ConsoleObserver {
    /// Echo every encoder line
    pub verbose: bool,
}

impl ConsoleObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn echo(&self, line: &str) {
        if self.verbose && !line.trim().is_empty() {
            terminal::print_above_progress(line);
        }
    }
}

impl ProcessObserver for ConsoleObserver {
    fn on_output(&self, line: &str) {
        self.echo(line);
    }

    fn on_error(&self, line: &str) {
        self.echo(line);
    }

    fn on_progress(&self, elapsed_secs: f64) {
        terminal::update_progress_spinner(elapsed_secs);
    }
}
