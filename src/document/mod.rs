/*!
 * Bilingual document loading.
 *
 * A memoQ bilingual export is a Word document holding one large table:
 * a header row with an `ID` cell, followed by one row per segment. The
 * header cells next to `ID` are named after the languages, so the source
 * and target columns are located by position:
 * - Source: first column right of `ID`
 * - Target: the column right of Source
 *
 * # Architecture
 *
 * - `docx`: ZIP + XML extraction of raw tables
 * - this module: bilingual table detection and row extraction
 */

pub mod docx;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info, warn};

use crate::errors::DocumentError;
use self::docx::RawTable;

/// Header cell marking the bilingual table
const ID_HEADER: &str = "ID";

/// Extensions of legacy bilingual exports that are recognised but not read
pub const LEGACY_EXTENSIONS: [&str; 2] = ["rtf", "rtx"];

/// One segment row as found in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualRow {
    /// Segment ID, trimmed
    pub id: String,
    /// Source cell text, verbatim
    pub source: String,
    /// Target cell text, verbatim
    pub target: String,
}

impl BilingualRow {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The bilingual table with the positions it was found at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualTable {
    /// Row index of the header inside its table
    pub header_row_index: usize,
    pub id_column: usize,
    pub source_column: usize,
    pub target_column: usize,
    /// Data rows after the header, in document order
    pub rows: Vec<BilingualRow>,
}

/// Load the bilingual table from a document on disk
pub fn load_bilingual_table<P: AsRef<Path>>(path: P) -> Result<BilingualTable, DocumentError> {
    let path = path.as_ref();

    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if LEGACY_EXTENSIONS.contains(&ext.as_str()) {
            return Err(DocumentError::UnsupportedFormat { extension: ext });
        }
    }

    info!("Loading DOCX document: {}", path.display());

    let file = File::open(path)?;
    let tables = docx::read_tables(BufReader::new(file))?;
    find_bilingual_table(&tables)
}

/// Locate the bilingual table among raw tables and extract its segment rows.
///
/// The first row (in any table) whose trimmed cells include `ID` and which
/// has at least three cells is taken as the header.
pub fn find_bilingual_table(tables: &[RawTable]) -> Result<BilingualTable, DocumentError> {
    for table in tables {
        for (header_row_index, row) in table.iter().enumerate() {
            let header: Vec<&str> = row.iter().map(|c| c.trim()).collect();
            if header.len() < 3 {
                continue;
            }
            let Some(id_column) = header.iter().position(|c| *c == ID_HEADER) else {
                continue;
            };

            let source_column = id_column + 1;
            let target_column = source_column + 1;
            if source_column >= header.len() {
                return Err(DocumentError::MissingColumn {
                    column: "source",
                    found: header.len(),
                });
            }
            if target_column >= header.len() {
                return Err(DocumentError::MissingColumn {
                    column: "target",
                    found: header.len(),
                });
            }

            info!(
                "Found bilingual table. Header row index: {}, 'ID' column index: {}",
                header_row_index, id_column
            );
            debug!(
                "Source column '{}' ({}), target column '{}' ({})",
                header[source_column], source_column, header[target_column], target_column
            );

            let rows = extract_rows(&table[header_row_index + 1..], id_column, source_column, target_column);

            return Ok(BilingualTable {
                header_row_index,
                id_column,
                source_column,
                target_column,
                rows,
            });
        }
    }

    Err(DocumentError::NoBilingualTable)
}

fn extract_rows(
    data_rows: &[Vec<String>],
    id_column: usize,
    source_column: usize,
    target_column: usize,
) -> Vec<BilingualRow> {
    let mut rows = Vec::with_capacity(data_rows.len());

    for (offset, row) in data_rows.iter().enumerate() {
        if row.len() <= target_column {
            warn!(
                "Skipping row {} after header: only {} cell(s)",
                offset + 1,
                row.len()
            );
            continue;
        }

        rows.push(BilingualRow::new(
            row[id_column].trim(),
            row[source_column].as_str(),
            row[target_column].as_str(),
        ));
    }

    rows
}
