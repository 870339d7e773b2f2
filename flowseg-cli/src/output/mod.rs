//! Output formatting module

use anyhow::Result;
use flowseg_core::ContentBlock;
use flowseg_html::to_html;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single block extracted from `source`
    fn format_block(&mut self, block: &ContentBlock, source: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{BlockData, JsonFormatter};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one block per line
    Text,
    /// JSON array of blocks with metadata
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Build the formatter for this format
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Single-line rendering of a block: its text, or the outer HTML of a preserved element
pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Text(text) => text.trim().to_string(),
        ContentBlock::Preserved(element) => to_html(element),
    }
}
