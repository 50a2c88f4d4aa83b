//! File discovery module for finding video files to process.
//!
//! Searches the top level of a directory for files with one of the
//! [`VIDEO_EXTENSIONS`] (case-insensitive). Subdirectories and hidden files are
//! ignored.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Extensions recognised as video input.
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];

/// Returns `true` when `path` has a recognised video extension.
#[must_use]
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)))
}

/// Finds video files eligible for processing in the specified directory.
///
/// Results are sorted by lowercase file name so batches run in a stable
/// order.
///
/// # Errors
///
/// * `CoreError::PathError` - `input_dir` does not exist or is not a directory
/// * `CoreError::Io` - the directory could not be read
/// * `CoreError::NoFilesFound` - no matching files were found
///
/// # Examples
///
/// ```rust,no_run
/// use vcompress_core::find_processable_files;
/// use std::path::Path;
///
/// match find_processable_files(Path::new("/path/to/videos")) {
///     Ok(files) => println!("Found {} video files", files.len()),
///     Err(e) => println!("Error finding video files: {}", e),
/// }
/// ```
pub fn find_processable_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input directory not found: {}",
            input_dir.display()
        )));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();

            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'));

            (path.is_file() && !hidden && is_video_file(&path)).then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_video_extensions() {
        assert!(is_video_file(Path::new("a.mp4")));
        assert!(is_video_file(Path::new("a.MOV")));
        assert!(is_video_file(Path::new("dir/a.Mkv")));
        assert!(is_video_file(Path::new("a.avi")));
        assert!(!is_video_file(Path::new("a.webm")));
        assert!(!is_video_file(Path::new("mp4")));
        assert!(!is_video_file(Path::new("a.mp4.txt")));
    }
}
