//! Depth-first dispatch over a container's children

use super::line_buffer::LineBuffer;
use super::standalone::{decide, following_text, Placement};
use super::ExtractionStats;
use crate::block::{normalized_clone, ContentBlock};
use crate::config::ExtractConfig;
use crate::dom::{Element, Node};
use crate::error::{CoreError, Result};
use crate::visibility::Visibility;

/// How a child node is handled, in dispatch priority order
#[derive(Debug, Clone, Copy)]
enum NodeCategory<'n> {
    Text(&'n str),
    Hidden(&'n Element),
    LineBreak,
    ThematicBreak(&'n Element),
    Leaf(&'n Element),
    Container(&'n Element),
}

/// State owned by one container pass
#[derive(Debug, Default)]
struct Frame {
    buffer: LineBuffer,
    blocks: Vec<ContentBlock>,
}

impl Frame {
    fn flush(&mut self) {
        self.buffer.flush(&mut self.blocks);
    }

    /// Flush, then append a normalized copy of `element`
    fn preserve(&mut self, element: &Element) {
        self.flush();
        self.blocks
            .push(ContentBlock::Preserved(normalized_clone(element)));
    }
}

/// Recursive tree walker
pub(crate) struct TreeWalker<'a> {
    config: &'a ExtractConfig,
    visibility: &'a dyn Visibility,
}

impl<'a> TreeWalker<'a> {
    pub(crate) fn new(config: &'a ExtractConfig, visibility: &'a dyn Visibility) -> Self {
        Self { config, visibility }
    }

    fn classify<'n>(&self, node: &'n Node) -> NodeCategory<'n> {
        match node {
            Node::Text(content) => NodeCategory::Text(content),
            Node::Element(el) if !self.visibility.is_visible(el) => NodeCategory::Hidden(el),
            Node::Element(el) if self.config.is_line_break(el) => NodeCategory::LineBreak,
            Node::Element(el) if self.config.is_thematic_break(el) => {
                NodeCategory::ThematicBreak(el)
            }
            Node::Element(el) if el.is_leaf() => NodeCategory::Leaf(el),
            Node::Element(el) => NodeCategory::Container(el),
        }
    }

    /// Process `container`'s children and return its blocks in document order
    pub(crate) fn walk(
        &self,
        container: &Element,
        depth: usize,
        stats: &mut ExtractionStats,
    ) -> Result<Vec<ContentBlock>> {
        if depth > self.config.max_depth {
            return Err(CoreError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        stats.max_depth = stats.max_depth.max(depth);

        let mut frame = Frame::default();

        for (index, child) in container.children.iter().enumerate() {
            match self.classify(child) {
                NodeCategory::Text(content) => {
                    frame.buffer.feed(content, &mut frame.blocks);
                }
                NodeCategory::Hidden(el) => {
                    log::trace!("skipping invisible <{}>", el.tag);
                    stats.hidden_elements += 1;
                }
                NodeCategory::LineBreak => frame.flush(),
                NodeCategory::ThematicBreak(el) => frame.preserve(el),
                NodeCategory::Leaf(el) => {
                    let following = following_text(&container.children, index);
                    match decide(frame.buffer.as_str(), following) {
                        Placement::Embedded => {
                            log::trace!("embedding <{}> into running text", el.tag);
                            frame.buffer.push_str(el.text_content().trim());
                            stats.embedded_elements += 1;
                        }
                        Placement::Standalone => {
                            log::trace!("preserving standalone <{}>", el.tag);
                            frame.preserve(el);
                        }
                    }
                }
                NodeCategory::Container(el) => {
                    frame.flush();
                    let nested = self.walk(el, depth + 1, stats)?;
                    frame.blocks.extend(nested);
                }
            }
        }

        frame.flush();
        Ok(frame.blocks)
    }
}
