//! JSON output formatter

use super::{render_block, OutputFormatter};
use anyhow::Result;
use flowseg_core::ContentBlock;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs blocks as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    blocks: Vec<BlockData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    /// `text` or `preserved`
    pub kind: String,
    /// Sentence text, or the text content of a preserved element
    pub text: String,
    /// Tag of a preserved element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Outer HTML of a preserved element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Input the block came from
    pub source: String,
}

impl BlockData {
    fn new(block: &ContentBlock, source: &str) -> Self {
        match block {
            ContentBlock::Text(text) => Self {
                kind: "text".to_string(),
                text: text.trim().to_string(),
                tag: None,
                html: None,
                source: source.to_string(),
            },
            ContentBlock::Preserved(element) => Self {
                kind: "preserved".to_string(),
                text: block.plain_text(),
                tag: Some(element.tag.clone()),
                html: Some(render_block(block)),
                source: source.to_string(),
            },
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            blocks: Vec::new(),
            pretty: true,
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_block(&mut self, block: &ContentBlock, source: &str) -> Result<()> {
        self.blocks.push(BlockData::new(block, source));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.blocks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.blocks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
