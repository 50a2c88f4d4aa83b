// Shared helpers for vcompress-core integration tests.
//
// Fake encoders are small `sh` scripts. They receive the same argument vector
// a real ffmpeg would: `-y -i <input> ... <output>`.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use vcompress_core::ProcessObserver;

/// Writes an executable shell script named `name` into `dir`.
#[cfg(unix)]
pub fn write_stub_encoder(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    {
        let mut file = File::create(&path).expect("create stub encoder");
        writeln!(file, "#!/bin/sh").unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.sync_all().unwrap();
    }
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Encoder that reports progress twice, then writes `output_bytes` bytes to
/// the output path (the last argument) and exits 0.
#[cfg(unix)]
pub fn successful_encoder(dir: &Path, output_bytes: usize) -> PathBuf {
    let body = format!(
        r#"for last; do :; done
echo "fake encoder starting"
printf 'frame=   10 fps=0.0 q=28.0 size=       0kB time=00:00:01.50 bitrate=N/A speed=3x\r' >&2
printf 'frame=   20 fps=0.0 q=28.0 size=       0kB time=00:00:03.00 bitrate=N/A speed=3x\n' >&2
dd if=/dev/zero of="$last" bs={output_bytes} count=1 2>/dev/null
exit 0
"#
    );
    write_stub_encoder(dir, "fake-ffmpeg-ok", &body)
}

/// Encoder that prints an error to stderr and exits 1.
#[cfg(unix)]
pub fn failing_encoder(dir: &Path) -> PathBuf {
    write_stub_encoder(
        dir,
        "fake-ffmpeg-fail",
        "echo \"Unknown encoder 'libx999': unsupported codec\" >&2\nexit 1\n",
    )
}

/// Creates `name` in `dir` filled with `len` bytes.
pub fn create_input(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![7u8; len]).expect("write input file");
    path
}

/// Observer that keeps every callback for later inspection.
#[derive(Default)]
pub struct RecordingObserver {
    pub stdout: Mutex<Vec<String>>,
    pub stderr: Mutex<Vec<String>>,
    pub progress: Mutex<Vec<f64>>,
}

impl ProcessObserver for RecordingObserver {
    fn on_output(&self, line: &str) {
        self.stdout.lock().unwrap().push(line.to_string());
    }

    fn on_error(&self, line: &str) {
        self.stderr.lock().unwrap().push(line.to_string());
    }

    fn on_progress(&self, elapsed_secs: f64) {
        self.progress.lock().unwrap().push(elapsed_secs);
    }
}
