/*!
 * Tests for error types and conversions
 */

use linecheck::errors::{AppError, DocumentError, InputError};

#[test]
fn test_documentError_noBilingualTable_shouldDisplayCorrectly() {
    let error = DocumentError::NoBilingualTable;
    let display = format!("{}", error);
    assert!(display.contains("'ID'"));
    assert!(display.contains("three columns"));
}

#[test]
fn test_documentError_missingColumn_shouldDisplayColumnAndCount() {
    let error = DocumentError::MissingColumn { column: "target", found: 2 };
    let display = format!("{}", error);
    assert!(display.contains("target"));
    assert!(display.contains("2 column"));
}

#[test]
fn test_documentError_unsupportedFormat_shouldAskForDocx() {
    let error = DocumentError::UnsupportedFormat { extension: "rtf".to_string() };
    let display = format!("{}", error);
    assert!(display.contains("'rtf'"));
    assert!(display.contains("bilingual DOCX"));
}

#[test]
fn test_inputError_invalidLimit_shouldShowValue() {
    let error = InputError::InvalidLimit("abc".to_string());
    assert_eq!(
        format!("{}", error),
        "Character limit must be a positive integer, got 'abc'"
    );
}

#[test]
fn test_appError_fromDocumentError_shouldWrapCorrectly() {
    let app_error: AppError = DocumentError::Xml("bad tag".to_string()).into();
    let display = format!("{}", app_error);
    assert!(display.contains("Document error"));
    assert!(display.contains("bad tag"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(ref msg) if msg.contains("gone")));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(_)));
}

#[test]
fn test_documentError_fromIoError_shouldKeepSource() {
    let error: DocumentError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
    assert!(matches!(error, DocumentError::Io(_)));
    assert!(format!("{}", error).contains("denied"));
}
