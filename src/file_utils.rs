use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::InputError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Report path `<stem>_length_report_<limit>.html`
    // @params: input_file, output_dir, limit
    pub fn report_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        limit: usize,
    ) -> PathBuf {
        let stem = input_file.as_ref().file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str("_length_report_");
        output_filename.push_str(&limit.to_string());
        output_filename.push_str(".html");

        output_dir.as_ref().join(output_filename)
    }

    /// Files directly inside `dir` whose extension is one of `extensions`, sorted by name.
    ///
    /// Word lock files (`~$name.docx`) are never returned.
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().starts_with("~$") {
                continue;
            }
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy();
                if extensions.iter().any(|e| ext.eq_ignore_ascii_case(e.trim_start_matches('.'))) {
                    result.push(path.to_path_buf());
                }
            }
        }

        Ok(result)
    }

    /// Pick the input document in `dir`: the first supported file, else the first legacy one.
    ///
    /// A legacy file is returned as-is so the caller can explain why it is rejected.
    pub fn discover_input<P: AsRef<Path>>(
        dir: P,
        extensions: &[String],
        legacy_extensions: &[String],
    ) -> Result<PathBuf> {
        let dir = dir.as_ref();

        if let Some(found) = Self::find_files(dir, extensions)?.into_iter().next() {
            return Ok(found);
        }
        if let Some(found) = Self::find_files(dir, legacy_extensions)?.into_iter().next() {
            return Ok(found);
        }

        Err(InputError::NoInputFile(dir.display().to_string()).into())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
