// ============================================================================
// vcompress-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Encoder Process Management
//
// This module launches the external encoder, streams its stdout and stderr
// line by line to a per-call observer, and returns the exit code together with
// everything the process printed.
//
// KEY COMPONENTS:
// - EncoderRunner: spawns the encoder and supervises it until exit
// - ProcessObserver: per-invocation listener for output lines and progress
// - ProcessOutput: exit code plus captured stdout/stderr
//
// ARCHITECTURE:
// The encoder is executed directly with an argument vector. Two reader tasks
// drain stdout and stderr into a channel while the calling task dispatches
// events and waits for the child, so a chatty encoder never blocks on a full
// pipe.

use crate::error::{CoreError, CoreResult};
use crate::external::ffmpeg_builder::render_command_line;
use crate::progress::parse_progress;

use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

/// A single notification produced while the encoder runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// A line written to stdout
    Stdout(String),
    /// A line written to stderr
    Stderr(String),
    /// Elapsed media time parsed from a stderr line, in seconds
    Progress(f64),
}

/// Listener for encoder output, scoped to a single run.
///
/// All methods default to no-ops so implementors only override what they
/// display.
pub trait ProcessObserver: Send + Sync {
    fn on_output(&self, _line: &str) {}
    fn on_error(&self, _line: &str) {}
    fn on_progress(&self, _elapsed_secs: f64) {}

    /// Routes an event to the matching callback.
    fn notify(&self, event: &ProcessEvent) {
        match event {
            ProcessEvent::Stdout(line) => self.on_output(line),
            ProcessEvent::Stderr(line) => self.on_error(line),
            ProcessEvent::Progress(secs) => self.on_progress(*secs),
        }
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProcessObserver for NullObserver {}

/// Exit code and captured output of a finished encoder process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Spawns and supervises the external encoder.
#[derive(Debug, Clone)]
pub struct EncoderRunner {
    encoder_path: String,
    timeout: Option<Duration>,
}

impl Default for EncoderRunner {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl EncoderRunner {
    /// Creates a runner for the given encoder binary (a path or a name resolved via PATH).
    #[must_use]
    pub fn new(encoder_path: impl Into<String>) -> Self {
        Self {
            encoder_path: encoder_path.into(),
            timeout: None,
        }
    }

    /// Kills the encoder if it runs longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn encoder_path(&self) -> &str {
        &self.encoder_path
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Checks that the encoder can be started by running `<encoder> -version`.
    pub async fn check_available(&self) -> CoreResult<()> {
        let status = Command::new(&self.encoder_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(_) => {
                log::debug!("Found encoder: {}", self.encoder_path);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::warn!("Encoder '{}' not found.", self.encoder_path);
                Err(CoreError::DependencyNotFound(self.encoder_path.clone()))
            }
            Err(e) => Err(CoreError::CommandStart(self.encoder_path.clone(), e)),
        }
    }

    /// Runs the encoder with `args` and waits for it to exit.
    ///
    /// Every output line is passed to `observer` as it arrives; stderr lines
    /// are also checked for progress markers. A non-zero exit is reported in
    /// the returned [`ProcessOutput`], not as an error.
    pub async fn run(
        &self,
        args: &[String],
        observer: &dyn ProcessObserver,
    ) -> CoreResult<ProcessOutput> {
        log::debug!(
            "Running encoder: {}",
            render_command_line(&self.encoder_path, args)
        );

        let mut child = Command::new(&self.encoder_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                log::error!("Failed to spawn {}: {}", self.encoder_path, e);
                CoreError::CommandStart(self.encoder_path.clone(), e)
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            CoreError::OperationFailed("encoder stdout was not captured".to_string())
        })?;
        let stderr = child.stderr.take().ok_or_else(|| {
            CoreError::OperationFailed("encoder stderr was not captured".to_string())
        })?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let stdout_task = tokio::spawn(read_lines(stdout, tx.clone(), ProcessEvent::Stdout));
        let stderr_task = tokio::spawn(read_lines(stderr, tx, ProcessEvent::Stderr));

        let mut captured = CapturedStreams::default();
        let waited = {
            let supervised = async {
                let dispatch = async {
                    while let Some(event) = rx.recv().await {
                        captured.record(event, observer);
                    }
                };
                let (status, ()) = tokio::join!(child.wait(), dispatch);
                status
            };

            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, supervised).await.ok(),
                None => Some(supervised.await),
            }
        };

        let status = match waited {
            Some(status) => {
                status.map_err(|e| CoreError::CommandWait(self.encoder_path.clone(), e))?
            }
            None => {
                let limit = self.timeout.unwrap_or_default();
                log::warn!(
                    "{} exceeded the {:?} timeout, killing it",
                    self.encoder_path,
                    limit
                );
                if let Err(e) = child.kill().await {
                    log::error!("Failed to kill {}: {}", self.encoder_path, e);
                }
                stdout_task.abort();
                stderr_task.abort();
                return Err(CoreError::Timeout(self.encoder_path.clone(), limit));
            }
        };

        for (name, task) in [("stdout", stdout_task), ("stderr", stderr_task)] {
            match task.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("Error reading encoder {name}: {e}"),
                Err(e) => log::warn!("Encoder {name} reader stopped: {e}"),
            }
        }

        log::debug!("{} exited with {}", self.encoder_path, status);

        Ok(ProcessOutput {
            exit_code: status.code(),
            stdout: captured.stdout,
            stderr: captured.stderr,
        })
    }
}

/// Accumulates output text while forwarding events to the observer.
#[derive(Default)]
struct CapturedStreams {
    stdout: String,
    stderr: String,
}

impl CapturedStreams {
    fn record(&mut self, event: ProcessEvent, observer: &dyn ProcessObserver) {
        observer.notify(&event);
        match event {
            ProcessEvent::Stdout(line) => {
                self.stdout.push_str(&line);
                self.stdout.push('\n');
            }
            ProcessEvent::Stderr(line) => {
                if let Some(secs) = parse_progress(&line) {
                    observer.notify(&ProcessEvent::Progress(secs));
                }
                self.stderr.push_str(&line);
                self.stderr.push('\n');
            }
            ProcessEvent::Progress(_) => {}
        }
    }
}

/// Splits a byte stream into lines on `\n` or `\r`.
///
/// ffmpeg redraws its status line with bare carriage returns, so both count
/// as terminators. Empty segments (e.g. from `\r\n`) are skipped.
#[derive(Debug, Default)]
pub(crate) struct LineSplitter {
    pending: Vec<u8>,
}

impl LineSplitter {
    pub(crate) fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for &byte in bytes {
            if byte == b'\n' || byte == b'\r' {
                if let Some(line) = self.take() {
                    lines.push(line);
                }
            } else {
                self.pending.push(byte);
            }
        }
        lines
    }

    pub(crate) fn finish(mut self) -> Option<String> {
        self.take()
    }

    fn take(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        Some(line)
    }
}

async fn read_lines<R>(
    reader: R,
    tx: mpsc::UnboundedSender<ProcessEvent>,
    wrap: fn(String) -> ProcessEvent,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut splitter = LineSplitter::default();

    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            break;
        }
        let consumed = buf.len();
        for line in splitter.push(buf) {
            // The receiver only goes away once run() has given up on the child.
            let _ = tx.send(wrap(line));
        }
        reader.consume(consumed);
    }

    if let Some(line) = splitter.finish() {
        let _ = tx.send(wrap(line));
    }
    Ok(())
}
