//! Plain text output formatter

use super::{render_block, OutputFormatter};
use anyhow::Result;
use flowseg_core::ContentBlock;
use std::io::Write;

/// Plain text formatter - outputs one block per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_block(&mut self, block: &ContentBlock, _source: &str) -> Result<()> {
        writeln!(self.writer, "{}", render_block(block))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
