// vcompress-core/tests/discovery_tests.rs

use std::fs::{self, File};
use std::path::PathBuf;
use tempfile::tempdir;
use vcompress_core::discovery::find_processable_files;
use vcompress_core::error::CoreError;

#[test]
fn test_find_processable_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("zebra.mp4"))?;
    File::create(input_dir.join("Alpha.MOV"))?;
    File::create(input_dir.join("beta.avi"))?;
    File::create(input_dir.join("Gamma.mkv"))?;
    File::create(input_dir.join("document.txt"))?;
    File::create(input_dir.join("clip.webm"))?;
    File::create(input_dir.join(".hidden.mp4"))?;
    fs::create_dir(input_dir.join("subdir"))?;
    File::create(input_dir.join("subdir").join("nested.mp4"))?;
    fs::create_dir(input_dir.join("folder.mkv"))?;

    let files = find_processable_files(input_dir)?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["Alpha.MOV", "beta.avi", "Gamma.mkv", "zebra.mp4"]);
    assert!(files.iter().all(|p| p.parent() == Some(input_dir)));
    Ok(())
}

#[test]
fn test_find_processable_files_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("document.txt"))?;
    fs::create_dir(dir.path().join("subdir"))?;

    match find_processable_files(dir.path()) {
        Err(CoreError::NoFilesFound) => {}
        other => panic!("Unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_find_processable_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    match find_processable_files(&non_existent_path) {
        Err(CoreError::PathError(msg)) => assert!(msg.contains("surely_this_does_not_exist_42")),
        other => panic!("Unexpected result: {:?}", other),
    }
}
