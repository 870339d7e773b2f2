//! Core error types

use thiserror::Error;

/// Extraction errors
///
/// Extraction is total for every acyclic tree within the configured depth
/// ceiling, so the only failure is a tree nested deeper than that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The tree nests containers deeper than `ExtractConfig::max_depth`
    #[error("document nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded {
        /// The configured ceiling that was crossed
        limit: usize,
    },
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to load
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for this schema
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but violates a constraint
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for extraction
pub type Result<T> = std::result::Result<T, CoreError>;
