/*!
 * Error types for the vttscrub application.
 *
 * The caption cleaner itself cannot fail; these types cover the layers
 * around it (configuration, file handling), using the thiserror crate for
 * ergonomic error definitions.
 */

use thiserror::Error;

/// Errors found while validating a configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Recency window must hold at least one line
    #[error("Invalid recency window: {0} (must be at least 1)")]
    InvalidRecencyWindow(usize),

    /// Folder mode needs at least one worker
    #[error("Invalid concurrent file count: {0} (must be at least 1)")]
    InvalidConcurrency(usize),

    /// An empty header prefix would swallow every line
    #[error("Header prefixes must not be empty strings")]
    EmptyHeaderPrefix,

    #[error("Output extension must not be empty")]
    EmptyExtension,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
