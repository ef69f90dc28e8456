use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use anyhow::{Context, Result};

use crate::errors::ConfigError;
use crate::vtt_cleaner::{DEFAULT_HEADER_PREFIXES, DEFAULT_RECENCY_WINDOW};

/// Application configuration module
/// This module handles loading, validating and saving the JSON configuration.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Caption cleaning settings
    #[serde(default)]
    pub cleaner: CleanerConfig,

    /// Transcript output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the caption cleaner
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CleanerConfig {
    /// Number of recently accepted lines a new line is compared against
    #[serde(default = "default_recency_window")]
    pub recency_window: usize,

    /// Line prefixes treated as header/metadata and skipped
    #[serde(default = "default_header_prefixes")]
    pub header_prefixes: Vec<String>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            recency_window: default_recency_window(),
            header_prefixes: default_header_prefixes(),
        }
    }
}

/// Settings for writing transcripts
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    // @field: Transcript file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    // @field: Files cleaned in parallel in folder mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            concurrent_files: default_concurrent_files(),
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

fn default_recency_window() -> usize {
    DEFAULT_RECENCY_WINDOW
}

fn default_header_prefixes() -> Vec<String> {
    DEFAULT_HEADER_PREFIXES.iter().map(|p| p.to_string()).collect()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_concurrent_files() -> usize {
    4
}

impl Config {
    /// Load a configuration file, filling in defaults for missing fields
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.cleaner.recency_window == 0 {
            return Err(ConfigError::InvalidRecencyWindow(self.cleaner.recency_window));
        }

        if self.cleaner.header_prefixes.iter().any(|p| p.is_empty()) {
            // An empty prefix would match every line
            return Err(ConfigError::EmptyHeaderPrefix);
        }

        if self.output.concurrent_files == 0 {
            return Err(ConfigError::InvalidConcurrency(self.output.concurrent_files));
        }

        let extension = self.output.extension.trim_start_matches('.');
        if extension.trim().is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            cleaner: CleanerConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
