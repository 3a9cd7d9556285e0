/*!
 * Validation module for line length checks.
 *
 * # Architecture
 *
 * - `markers`: Collapses inline tags into line breaks
 * - `length`: Measures logical lines against the character limit
 */

pub mod markers;
pub mod length;

// Re-export main types
pub use length::{CheckSummary, LineChecker, LineCheckerConfig, Segment};
pub use markers::{logical_lines, normalize_markers};
