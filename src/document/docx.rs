//! DOCX table extraction
//!
//! DOCX files are ZIP archives; everything this tool needs lives in
//! `word/document.xml`. The body is streamed with quick-xml and every
//! top-level `w:tbl` is collected as rows of plain cell text.
//!
//! Cell text follows Word's own plain-text rendering:
//! - paragraphs inside a cell are joined with `\n`
//! - `w:br` and `w:cr` inside a run become `\n`
//! - `w:tab` inside a run becomes `\t`
//! - text of nested tables is appended to the enclosing cell

use std::io::{Read, Seek};

use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::DocumentError;

/// Archive entry holding the document body
const DOCUMENT_PART: &str = "word/document.xml";

/// A table as rows of cell texts
pub type RawTable = Vec<Vec<String>>;

/// Read all top-level tables from a DOCX archive
pub fn read_tables<R: Read + Seek>(reader: R) -> Result<Vec<RawTable>, DocumentError> {
    let mut archive = ZipArchive::new(reader)?;

    let xml_content = {
        let mut document_xml = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| DocumentError::MissingPart(DOCUMENT_PART.to_string()))?;

        let mut content = String::new();
        document_xml.read_to_string(&mut content)?;
        content
    };

    parse_tables(&xml_content)
}

/// Extract top-level tables from the XML of `word/document.xml`
pub fn parse_tables(xml_content: &str) -> Result<Vec<RawTable>, DocumentError> {
    let mut state = TableWalker::default();

    let mut reader = Reader::from_str(xml_content);
    // xml:space="preserve" runs carry meaningful leading/trailing spaces
    reader.trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => state.handle_start(e.name().as_ref()),
            Ok(Event::Empty(e)) => state.handle_empty(e.name().as_ref()),
            Ok(Event::Text(e)) => {
                if state.in_text {
                    let text = e.unescape()?;
                    state.push_text(&text);
                }
            }
            Ok(Event::End(e)) => state.handle_end(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::Xml(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    debug!("Parsed {} table(s) from {}", state.tables.len(), DOCUMENT_PART);
    Ok(state.tables)
}

/// Streaming state while walking the document body
#[derive(Debug, Default)]
struct TableWalker {
    tables: Vec<RawTable>,
    current_table: RawTable,
    current_row: Vec<String>,
    current_cell: Option<String>,
    /// Nesting depth of `w:tbl`; only depth 1 builds rows and cells
    table_depth: usize,
    cell_has_paragraph: bool,
    in_run: bool,
    in_text: bool,
}

impl TableWalker {
    fn handle_start(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.current_table = Vec::new();
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                self.current_row = Vec::new();
            }
            b"w:tc" if self.table_depth == 1 => {
                self.current_cell = Some(String::new());
                self.cell_has_paragraph = false;
            }
            b"w:p" => self.start_paragraph(),
            b"w:r" => self.in_run = true,
            b"w:t" if self.in_run => self.in_text = true,
            _ => {}
        }
    }

    fn handle_empty(&mut self, name: &[u8]) {
        match name {
            b"w:p" => self.start_paragraph(),
            b"w:br" | b"w:cr" if self.in_run => self.push_text("\n"),
            b"w:tab" if self.in_run => self.push_text("\t"),
            _ => {}
        }
    }

    fn handle_end(&mut self, name: &[u8]) {
        match name {
            b"w:t" => self.in_text = false,
            b"w:r" => self.in_run = false,
            b"w:tc" if self.table_depth == 1 => {
                if let Some(cell) = self.current_cell.take() {
                    self.current_row.push(cell);
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                let row = std::mem::take(&mut self.current_row);
                self.current_table.push(row);
            }
            b"w:tbl" if self.table_depth > 0 => {
                self.table_depth -= 1;
                if self.table_depth == 0 {
                    let table = std::mem::take(&mut self.current_table);
                    self.tables.push(table);
                }
            }
            _ => {}
        }
    }

    fn start_paragraph(&mut self) {
        if let Some(cell) = self.current_cell.as_mut() {
            if self.cell_has_paragraph {
                cell.push('\n');
            }
            self.cell_has_paragraph = true;
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.current_cell.as_mut() {
            cell.push_str(text);
        }
    }
}
