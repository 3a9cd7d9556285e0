/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use linecheck::file_utils::FileManager;
use crate::common;

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::dir_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that report_path follows the `<stem>_length_report_<limit>.html` pattern
#[test]
fn test_report_path_withValidInputs_shouldCreateCorrectPath() {
    let input_file = Path::new("/tmp/input/project_de.docx");
    let output_dir = Path::new("/tmp/output");

    let output_path = FileManager::report_path(input_file, output_dir, 42);

    assert_eq!(output_path, Path::new("/tmp/output/project_de_length_report_42.html"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(FileManager::dir_exists(&nested));
    Ok(())
}

/// Test that write_to_file creates missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("reports").join("out.html");

    FileManager::write_to_file(&target, "<html></html>")?;

    assert_eq!(std::fs::read_to_string(&target)?, "<html></html>");
    Ok(())
}

/// Test that discover_input prefers DOCX files and sorts by name
#[test]
fn test_discover_input_withSeveralFiles_shouldPickFirstDocx() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a_export.rtf", "{\\rtf1}")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "x")?;
    common::create_test_file(temp_dir.path(), "z_second.docx", "x")?;
    common::create_test_file(temp_dir.path(), "b_first.DOCX", "x")?;

    let found = FileManager::discover_input(temp_dir.path(), &exts(&["docx"]), &exts(&["rtf", "rtx"]))?;

    assert_eq!(found.file_name().unwrap(), "b_first.DOCX");
    Ok(())
}

/// Test that Word lock files are ignored
#[test]
fn test_discover_input_withLockFile_shouldSkipIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "~$export.docx", "lock")?;
    common::create_test_file(temp_dir.path(), "export.docx", "x")?;

    let found = FileManager::discover_input(temp_dir.path(), &exts(&["docx"]), &exts(&["rtf"]))?;

    assert_eq!(found.file_name().unwrap(), "export.docx");
    Ok(())
}

/// Test that discovery does not descend into subdirectories
#[test]
fn test_discover_input_withDocxInSubdir_shouldIgnoreIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sub = temp_dir.path().join("archive");
    FileManager::ensure_dir(&sub)?;
    common::create_test_file(&sub, "old.docx", "x")?;

    let result = FileManager::discover_input(temp_dir.path(), &exts(&["docx"]), &exts(&["rtf"]));

    assert!(result.is_err());
    Ok(())
}

/// Test that a legacy export is returned when no DOCX exists
#[test]
fn test_discover_input_withOnlyLegacyFile_shouldReturnIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "export.rtx", "x")?;

    let found = FileManager::discover_input(temp_dir.path(), &exts(&["docx"]), &exts(&["rtf", "rtx"]))?;

    assert_eq!(found.extension().unwrap(), "rtx");
    Ok(())
}

/// Test that an empty folder is an error
#[test]
fn test_discover_input_withEmptyDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let result = FileManager::discover_input(temp_dir.path(), &exts(&["docx"]), &exts(&["rtf"]));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("No DOCX or RTF/RTX file found"));
    Ok(())
}
