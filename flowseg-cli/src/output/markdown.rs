//! Markdown output formatter

use super::{render_block, OutputFormatter};
use anyhow::Result;
use flowseg_core::ContentBlock;
use std::io::Write;

/// Markdown formatter - outputs blocks as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    block_count: usize,
    preserved_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            block_count: 0,
            preserved_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_block(&mut self, block: &ContentBlock, _source: &str) -> Result<()> {
        self.block_count += 1;
        match block {
            ContentBlock::Text(_) => {
                writeln!(self.writer, "{}. {}", self.block_count, render_block(block))?;
            }
            ContentBlock::Preserved(_) => {
                self.preserved_count += 1;
                writeln!(self.writer, "{}. `{}`", self.block_count, render_block(block))?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total blocks: {} ({} preserved)*",
            self.block_count, self.preserved_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
