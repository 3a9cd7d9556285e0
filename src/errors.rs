/*!
 * Error types for the linecheck application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while loading the bilingual document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input file could not be opened or read
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is not a ZIP container (DOCX files always are)
    #[error("Not a valid DOCX archive: {0}")]
    NotAnArchive(String),

    /// A required part is missing from the archive
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// The document XML could not be parsed
    #[error("Malformed document XML: {0}")]
    Xml(String),

    /// No table with an 'ID' header row was found
    #[error("No table with an 'ID' header and at least three columns was found")]
    NoBilingualTable,

    /// The header row does not leave room for a source and target column
    #[error("Could not determine {column} column: header row has {found} column(s)")]
    MissingColumn {
        /// Name of the column that could not be located
        column: &'static str,
        /// Number of cells in the header row
        found: usize,
    },

    /// The file format is recognised but not supported
    #[error("Unsupported input format '{extension}': please export a bilingual DOCX from memoQ")]
    UnsupportedFormat {
        /// File extension of the rejected input
        extension: String,
    },
}

/// Errors caused by user input rather than the document
#[derive(Error, Debug)]
pub enum InputError {
    /// Nothing usable was found in the working directory
    #[error("No DOCX or RTF/RTX file found in {0}")]
    NoInputFile(String),

    /// The character limit is not a positive integer
    #[error("Character limit must be a positive integer, got '{0}'")]
    InvalidLimit(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from document loading
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from user input
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<zip::result::ZipError> for DocumentError {
    fn from(error: zip::result::ZipError) -> Self {
        match error {
            zip::result::ZipError::Io(e) => Self::Io(e),
            other => Self::NotAnArchive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for DocumentError {
    fn from(error: quick_xml::Error) -> Self {
        Self::Xml(error.to_string())
    }
}
