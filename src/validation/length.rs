/*!
 * Line length validation for bilingual segments.
 *
 * Every target cell is collapsed into logical lines (see `markers`), and each
 * line is measured in characters against the configured limit:
 * - A segment overflows when any of its lines is longer than the limit
 * - Lines made only of whitespace measure as zero
 * - Lengths count Unicode scalar values, never bytes
 */

use std::collections::BTreeSet;

use log::debug;

use crate::document::{BilingualRow, BilingualTable};
use crate::validation::markers::{logical_lines, normalize_markers};

/// Measured length of a logical line
pub fn line_length(line: &str) -> usize {
    if line.trim().is_empty() {
        0
    } else {
        line.chars().count()
    }
}

/// Split a line after `limit` characters, returning the kept prefix and the overflow.
///
/// The split always lands on a character boundary; a line within the limit
/// has an empty overflow.
pub fn split_at_limit(line: &str, limit: usize) -> (&str, &str) {
    match line.char_indices().nth(limit) {
        Some((byte_idx, _)) => line.split_at(byte_idx),
        None => (line, ""),
    }
}

/// Result of checking one row of the bilingual table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: String,
    source_text: String,
    target_text: String,
    target_lines: Vec<String>,
    line_lengths: Vec<usize>,
    overflow_line_indices: BTreeSet<usize>,
}

impl Segment {
    /// Full segment ID as exported
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Leading token of the ID, the memoQ segment number
    pub fn short_id(&self) -> &str {
        self.id.split_whitespace().next().unwrap_or("")
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Target text as it appears in the document, markers included
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    /// Logical lines of the target after marker collapsing
    pub fn target_lines(&self) -> &[String] {
        &self.target_lines
    }

    /// Measured length of each logical line, same order as `target_lines`
    pub fn line_lengths(&self) -> &[usize] {
        &self.line_lengths
    }

    /// Whether any logical line is longer than the limit
    pub fn overflow(&self) -> bool {
        !self.overflow_line_indices.is_empty()
    }

    /// Indices into `target_lines` of the lines that exceed the limit
    pub fn overflow_line_indices(&self) -> &BTreeSet<usize> {
        &self.overflow_line_indices
    }

    /// Longest measured line
    pub fn max_line_length(&self) -> usize {
        self.line_lengths.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all measured line lengths
    pub fn segment_length(&self) -> usize {
        self.line_lengths.iter().sum()
    }

    /// True when the target has no visible text at all
    pub fn is_blank(&self) -> bool {
        self.line_lengths.iter().all(|len| *len == 0)
    }
}

/// Result of checking a whole table
#[derive(Debug, Clone)]
pub struct CheckSummary {
    /// Limit the segments were checked against
    pub limit: usize,
    /// Every checked segment, in table order
    pub segments: Vec<Segment>,
}

impl CheckSummary {
    /// Segments with at least one overflowing line
    pub fn violations(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.overflow())
    }

    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }

    /// Total number of overflowing lines across all segments
    pub fn overflowing_line_count(&self) -> usize {
        self.segments.iter().map(|s| s.overflow_line_indices().len()).sum()
    }

    pub fn passed(&self) -> bool {
        self.violation_count() == 0
    }
}

/// Configuration for line length checking
#[derive(Debug, Clone)]
pub struct LineCheckerConfig {
    /// Maximum characters allowed on one logical line
    pub limit: usize,
}

/// Line length checker for bilingual segments
pub struct LineChecker {
    config: LineCheckerConfig,
}

impl LineChecker {
    /// Create a checker for the given per-line character limit
    pub fn new(limit: usize) -> Self {
        Self::with_config(LineCheckerConfig { limit })
    }

    pub fn with_config(config: LineCheckerConfig) -> Self {
        Self { config }
    }

    pub fn limit(&self) -> usize {
        self.config.limit
    }

    /// Check a single (id, source, target) triple
    pub fn check_text(&self, id: &str, source_text: &str, target_text: &str) -> Segment {
        let normalized = normalize_markers(target_text);

        let mut target_lines = Vec::new();
        let mut line_lengths = Vec::new();
        let mut overflow_line_indices = BTreeSet::new();

        for (idx, line) in logical_lines(&normalized).enumerate() {
            let len = line_length(line);
            if len > self.config.limit {
                overflow_line_indices.insert(idx);
            }
            target_lines.push(line.to_string());
            line_lengths.push(len);
        }

        Segment {
            id: id.to_string(),
            source_text: source_text.to_string(),
            target_text: target_text.to_string(),
            target_lines,
            line_lengths,
            overflow_line_indices,
        }
    }

    /// Check one row of the bilingual table
    pub fn check_row(&self, row: &BilingualRow) -> Segment {
        self.check_text(&row.id, &row.source, &row.target)
    }

    /// Check every row of a table, keeping table order
    pub fn check_table(&self, table: &BilingualTable) -> CheckSummary {
        let segments: Vec<Segment> = table.rows.iter().map(|row| self.check_row(row)).collect();

        let summary = CheckSummary {
            limit: self.config.limit,
            segments,
        };

        debug!(
            "Line length check: {} segments, {} over the limit, {} overflowing lines",
            summary.segments.len(),
            summary.violation_count(),
            summary.overflowing_line_count()
        );

        summary
    }
}
