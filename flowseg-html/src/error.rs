//! HTML adapter error types

use flowseg_core::CoreError;
use thiserror::Error;

/// Errors raised while turning HTML into content blocks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlError {
    /// No element matched the requested content root
    #[error("content root '{0}' not found in document")]
    RootNotFound(String),

    /// The root selector could not be parsed
    #[error("invalid root selector '{0}': expected a tag name or #id")]
    InvalidSelector(String),

    /// Depth ceiling hit while parsing, or extraction failed
    #[error(transparent)]
    Extract(#[from] CoreError),
}

/// Result type for HTML operations
pub type Result<T> = std::result::Result<T, HtmlError>;
