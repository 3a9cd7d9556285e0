use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document;
use crate::errors::{DocumentError, InputError};
use crate::file_utils::FileManager;
use crate::report::Report;
use crate::validation::LineChecker;

// @module: Application controller for line length checks

/// Prompt shown when no limit was given on the command line or in the config
pub const LIMIT_PROMPT: &str = "Enter character limit per line: ";

/// Parse a user-supplied character limit
pub fn parse_limit(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(InputError::InvalidLimit(trimmed.to_string())),
    }
}

/// Ask for the limit until a valid one is entered.
///
/// Invalid answers are reported on `output` and the question is repeated;
/// running out of input is an error.
pub fn prompt_for_limit<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        write!(output, "{}", LIMIT_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read character limit")?;
        if read == 0 {
            return Err(anyhow!("No character limit entered"));
        }

        match parse_limit(&line) {
            Ok(limit) => return Ok(limit),
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Where the report was written
    pub report_path: PathBuf,
    /// Number of segment rows checked
    pub segments_checked: usize,
    /// Number of segments with at least one line over the limit
    pub violations: usize,
}

/// Main application controller for line length checks
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Use the explicit input when given, otherwise discover one in `dir`.
    ///
    /// Legacy exports are rejected here, before the user is asked for a limit.
    pub fn resolve_input(&self, input: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
        let path = match input {
            Some(path) => {
                if !FileManager::file_exists(&path) {
                    return Err(anyhow!("Input file does not exist: {:?}", path));
                }
                path
            }
            None => {
                let found = FileManager::discover_input(
                    dir,
                    &self.config.input.extensions,
                    &self.config.input.legacy_extensions,
                )?;
                info!("Detected file in current folder: {}", found.display());
                found
            }
        };

        self.ensure_supported(&path)?;
        Ok(path)
    }

    fn ensure_supported(&self, path: &Path) -> Result<(), DocumentError> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let is_legacy = self
            .config
            .input
            .legacy_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&extension));

        if is_legacy {
            return Err(DocumentError::UnsupportedFormat { extension });
        }
        Ok(())
    }

    /// Check `input_file` against `limit` and write the report.
    ///
    /// The report goes next to the input unless `output_dir` is given, and
    /// is written even when nothing exceeds the limit.
    pub fn run_with_limit(&self, input_file: &Path, output_dir: Option<&Path>, limit: usize) -> Result<RunOutcome> {
        let start_time = std::time::Instant::now();

        if limit == 0 {
            return Err(InputError::InvalidLimit(limit.to_string()).into());
        }

        let table = document::load_bilingual_table(input_file)
            .with_context(|| format!("Failed to load bilingual table from {:?}", input_file))?;

        if table.rows.is_empty() {
            warn!("The bilingual table has no segment rows");
        }

        let checker = LineChecker::new(limit);
        let summary = checker.check_table(&table);
        let violations = summary.violation_count();

        info!(
            "Found {} segments with at least one line longer than {} characters.",
            violations, limit
        );

        let source_name = input_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let html = Report::new(&summary, source_name)
            .with_title(self.config.report.title.clone())
            .include_passing(self.config.report.include_passing)
            .render();

        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_file.parent().unwrap_or(Path::new(".")).to_path_buf(),
        };
        let report_path = FileManager::report_path(input_file, &output_dir, limit);
        FileManager::write_to_file(&report_path, &html)?;

        info!("HTML report written to: {}", report_path.display());
        info!("Check completed in {}.", Self::format_duration(start_time.elapsed()));

        Ok(RunOutcome {
            report_path,
            segments_checked: summary.segments.len(),
            violations,
        })
    }

    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
