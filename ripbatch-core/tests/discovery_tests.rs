// ripbatch-core/tests/discovery_tests.rs

use ripbatch_core::discovery::find_input_files;

use std::fs::{self, File};
use std::path::PathBuf;

use tempfile::tempdir;

#[test]
fn test_flat_directory_same_set_in_both_modes() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("video1.avi"))?;
    File::create(input_dir.join("video2.mkv"))?;
    File::create(input_dir.join("notes.txt"))?; // no extension filtering

    let flat = find_input_files(input_dir, false)?;
    let recursive = find_input_files(input_dir, true)?;

    assert_eq!(flat.len(), 3);
    assert_eq!(flat, recursive);

    dir.close()?;
    Ok(())
}

#[test]
fn test_recursive_includes_nested_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("a.avi"))?;
    fs::create_dir(input_dir.join("sub"))?;
    File::create(input_dir.join("sub").join("b.mkv"))?;
    fs::create_dir_all(input_dir.join("sub").join("deeper"))?;
    File::create(input_dir.join("sub").join("deeper").join("c.mov"))?;

    let files = find_input_files(input_dir, true)?;
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(files.len(), 3);
    assert!(names.contains(&"a.avi".to_string()));
    assert!(names.contains(&"b.mkv".to_string()));
    assert!(names.contains(&"c.mov".to_string()));

    dir.close()?;
    Ok(())
}

#[test]
fn test_non_recursive_skips_nested_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("a.avi"))?;
    fs::create_dir(input_dir.join("sub"))?;
    File::create(input_dir.join("sub").join("b.mkv"))?;

    let files = find_input_files(input_dir, false)?;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap(), "a.avi");

    dir.close()?;
    Ok(())
}

#[test]
fn test_empty_directory_is_ok_not_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    assert!(find_input_files(dir.path(), true)?.is_empty());
    assert!(find_input_files(dir.path(), false)?.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_nonexistent_directory_is_error() {
    let missing = PathBuf::from("surely_this_does_not_exist_42_integration");
    assert!(find_input_files(&missing, true).is_err());
    assert!(find_input_files(&missing, false).is_err());
}

#[test]
fn test_order_is_sorted_and_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("zeta.avi"))?;
    File::create(input_dir.join("alpha.avi"))?;
    File::create(input_dir.join("mid.avi"))?;

    let files = find_input_files(input_dir, false)?;
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["alpha.avi", "mid.avi", "zeta.avi"]);

    dir.close()?;
    Ok(())
}
