// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use linecheck::app_config::{self, Config};
use linecheck::app_controller::{self, Controller};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for linecheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// linecheck - line length checker for memoQ bilingual exports
///
/// Reads the bilingual table of a DOCX export, collapses inline tags into
/// line breaks and reports every segment with a line longer than the limit.
#[derive(Parser, Debug)]
#[command(name = "linecheck")]
#[command(version)]
#[command(about = "Flag translated lines that exceed a character limit")]
#[command(long_about = "linecheck reads the bilingual table of a memoQ DOCX export and writes an HTML report
of every segment whose target has a line longer than the configured limit.

EXAMPLES:
    linecheck                                 # Use the first DOCX in the current folder, ask for the limit
    linecheck -l 42                           # Check against 42 characters per line
    linecheck -l 42 export.docx               # Check a specific file
    linecheck -l 42 -o reports/ export.docx   # Write the report to another folder
    linecheck --include-passing -l 42         # List every segment, not only violations
    linecheck completions bash > linecheck.bash

CONFIGURATION:
    Configuration is stored in linecheck.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Bilingual DOCX file to check (default: first DOCX found in --dir)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Folder searched for the input file
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Maximum characters per line (asked interactively when not set)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Folder for the generated report (default: next to the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "linecheck.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// List passing segments in the report too
    #[arg(long)]
    include_passing: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {}{}\x1B[0m",
                colour, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "linecheck", &mut std::io::stdout());
        return Ok(());
    }

    run_check(cli)
}

fn run_check(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    info!("=== memoQ Line Length Checker - v{} (DOCX + HTML) ===", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_or_create(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(limit) = options.limit {
        config.char_limit = Some(limit);
    }
    if options.include_passing {
        config.report.include_passing = true;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    let input_file = controller.resolve_input(options.input_path.clone(), &options.dir)?;

    let limit = match controller.config().char_limit {
        Some(limit) => limit,
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stderr();
            app_controller::prompt_for_limit(&mut input, &mut output)?
        }
    };

    let outcome = controller.run_with_limit(&input_file, options.output_dir.as_deref(), limit)?;

    info!(
        "Checked {} segments, {} over the limit.",
        outcome.segments_checked, outcome.violations
    );

    Ok(())
}
