//! Extraction of content blocks from a document tree
//!
//! The walker processes one container at a time. Each pass owns a fresh
//! [`LineBuffer`] and block list; nested containers are processed by a
//! recursive pass whose blocks are spliced in at the container's position.
//! Before any preserved element (or nested container) is appended, the
//! buffer is flushed, so text never jumps over structure.

mod line_buffer;
mod standalone;
mod walker;

pub use line_buffer::LineBuffer;
pub use standalone::{decide, following_text, Placement};

use crate::block::ContentBlock;
use crate::config::ExtractConfig;
use crate::dom::Element;
use crate::error::Result;
use crate::visibility::{AlwaysVisible, Visibility};
use serde::{Deserialize, Serialize};
use walker::TreeWalker;

/// Counters collected during one extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of sentence blocks produced
    pub text_blocks: usize,
    /// Number of preserved element blocks produced
    pub preserved_elements: usize,
    /// Invisible elements skipped without traversal
    pub hidden_elements: usize,
    /// Leaf elements whose text was merged into running prose
    pub embedded_elements: usize,
    /// Deepest container level visited (root container is 0)
    pub max_depth: usize,
}

/// Ordered blocks produced from one content root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Blocks in document order
    pub blocks: Vec<ContentBlock>,
    /// Counters for the run
    pub stats: ExtractionStats,
}

impl Extraction {
    /// Consume the extraction, keeping only the blocks
    pub fn into_blocks(self) -> Vec<ContentBlock> {
        self.blocks
    }

    /// Plain text of every block, in order
    pub fn plain_texts(&self) -> Vec<String> {
        self.blocks.iter().map(ContentBlock::plain_text).collect()
    }
}

/// Extracts content blocks using a configuration and visibility predicate
///
/// The extractor holds no per-run state; the same instance can be reused
/// (and shared across threads) for any number of documents.
#[derive(Clone, Copy)]
pub struct Extractor<'a> {
    config: &'a ExtractConfig,
    visibility: &'a dyn Visibility,
}

impl<'a> Extractor<'a> {
    /// Create an extractor
    pub fn new(config: &'a ExtractConfig, visibility: &'a dyn Visibility) -> Self {
        Self { config, visibility }
    }

    /// Extract the blocks of `root`'s children
    ///
    /// The root container itself is not checked for visibility.
    pub fn extract(&self, root: &Element) -> Result<Extraction> {
        let mut stats = ExtractionStats::default();
        let blocks = TreeWalker::new(self.config, self.visibility).walk(root, 0, &mut stats)?;

        stats.text_blocks = blocks.iter().filter(|block| block.is_text()).count();
        stats.preserved_elements = blocks.len() - stats.text_blocks;

        log::debug!(
            "extracted {} blocks from <{}> ({} text, {} preserved, {} hidden skipped)",
            blocks.len(),
            root.tag,
            stats.text_blocks,
            stats.preserved_elements,
            stats.hidden_elements
        );

        Ok(Extraction { blocks, stats })
    }
}

impl std::fmt::Debug for Extractor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", self.config)
            .field("visibility", &"<dyn Visibility>")
            .finish()
    }
}

/// Extract with the default configuration, treating everything as visible
pub fn extract(root: &Element) -> Result<Extraction> {
    let config = ExtractConfig::default();
    Extractor::new(&config, &AlwaysVisible).extract(root)
}
