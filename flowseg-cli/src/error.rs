//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Input that is not a usable document
    InvalidDocument(String),
    /// Configuration error
    ConfigError(String),
    /// Content root missing from a document
    RootNotFound {
        /// Selector that matched nothing
        selector: String,
        /// Document that was searched
        document: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidDocument(msg) => write!(f, "Invalid document: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::RootNotFound { selector, document } => {
                write!(f, "Content root '{selector}' not found in {document}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
