use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Maximum characters per logical line; prompted for when absent
    #[serde(default)]
    pub char_limit: Option<usize>,

    /// Input discovery settings
    #[serde(default)]
    pub input: InputConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Which files in the working directory are considered input
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    // @field: Extensions that are loaded
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    // @field: Extensions that are recognised but rejected
    #[serde(default = "default_legacy_extensions")]
    pub legacy_extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            legacy_extensions: default_legacy_extensions(),
        }
    }
}

/// Report rendering settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportConfig {
    /// List every segment, not only those over the limit
    #[serde(default)]
    pub include_passing: bool,

    /// Title shown in the report header
    #[serde(default = "default_report_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_passing: false,
            title: default_report_title(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["docx".to_string()]
}

fn default_legacy_extensions() -> Vec<String> {
    crate::document::LEGACY_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_report_title() -> String {
    "MK Line Length Check".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.char_limit == Some(0) {
            return Err(anyhow!("char_limit must be greater than zero"));
        }

        if self.input.extensions.is_empty() {
            return Err(anyhow!("At least one input extension must be configured"));
        }

        if self.report.title.trim().is_empty() {
            return Err(anyhow!("Report title must not be empty"));
        }

        Ok(())
    }

    /// Load the configuration file, writing a default one when it does not exist
    pub fn load_or_create<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let file = File::open(config_path)
                .context(format!("Failed to open config file: {}", config_path.display()))?;

            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .context(format!("Failed to parse config file: {}", config_path.display()))?;

            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", config_path.display());

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path.display()))?;

        Ok(config)
    }
}
