/*!
 * # linecheck - line length checker for bilingual memoQ exports
 *
 * A Rust library for finding translated segments whose lines are too long.
 *
 * ## Features
 *
 * - Read the bilingual table from a memoQ DOCX export
 * - Collapse inline tags (`<...>`, `[...]`, `{...}`) into line breaks
 * - Measure every logical line in characters against a limit
 * - Write a standalone HTML report with the overflow highlighted
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Bilingual table loading:
 *   - `document::docx`: ZIP + XML table extraction
 * - `validation`: Line segmentation and checking:
 *   - `validation::markers`: Inline tag collapsing
 *   - `validation::length`: Per-line length measurement
 * - `report`: HTML report rendering
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod report;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunOutcome};
pub use document::{BilingualRow, BilingualTable};
pub use errors::{AppError, DocumentError, InputError};
pub use validation::{CheckSummary, LineChecker, Segment};
