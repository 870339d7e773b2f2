//! Output blocks and clone-then-normalize for preserved elements

use crate::dom::{Element, Node};
use serde::{Deserialize, Serialize};

/// One presentable unit of extracted content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    /// A trimmed sentence (or sentence fragment) of plain text
    Text(String),
    /// A normalized deep copy of a structural element
    Preserved(Element),
}

impl ContentBlock {
    /// Whether this is a text block
    pub fn is_text(&self) -> bool {
        matches!(self, ContentBlock::Text(_))
    }

    /// The preserved element, if any
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ContentBlock::Text(_) => None,
            ContentBlock::Preserved(element) => Some(element),
        }
    }

    /// Plain text of the block
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Text(text) => text.clone(),
            ContentBlock::Preserved(element) => element.text_content(),
        }
    }
}

/// Deep copy of `element` with its text flattened onto a single line
///
/// Every run of whitespace (newlines included) collapses to one space and
/// the text is trimmed at both ends of the subtree. Tag, attributes and
/// nesting are untouched; the source element is never modified.
pub fn normalized_clone(element: &Element) -> Element {
    let mut copy = element.clone();

    let mut slots = Vec::new();
    collect_text_mut(&mut copy.children, &mut slots);

    // Whitespace runs may span text nodes; starting "in whitespace" drops the
    // leading run of the whole subtree
    let mut in_whitespace = true;
    for slot in slots.iter_mut() {
        **slot = collapse_whitespace(slot, &mut in_whitespace);
    }

    for slot in slots.iter_mut().rev() {
        let trimmed = slot.trim_end().to_string();
        let reached_text = !trimmed.is_empty();
        **slot = trimmed;
        if reached_text {
            break;
        }
    }

    copy
}

fn collect_text_mut<'a>(children: &'a mut [Node], out: &mut Vec<&'a mut String>) {
    for child in children {
        match child {
            Node::Text(text) => out.push(text),
            Node::Element(element) => collect_text_mut(&mut element.children, out),
        }
    }
}

fn collapse_whitespace(text: &str, in_whitespace: &mut bool) -> String {
    let mut collapsed = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !*in_whitespace {
                collapsed.push(' ');
            }
            *in_whitespace = true;
        } else {
            collapsed.push(ch);
            *in_whitespace = false;
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        let mut in_whitespace = false;
        assert_eq!(collapse_whitespace("a \n\t b", &mut in_whitespace), "a b");
        assert_eq!(collapse_whitespace("  lead", &mut in_whitespace), " lead");

        // A run that started in an earlier node is not repeated
        let mut in_whitespace = false;
        assert_eq!(collapse_whitespace("end ", &mut in_whitespace), "end ");
        assert_eq!(collapse_whitespace("  next", &mut in_whitespace), "next");
    }

    #[test]
    fn test_normalized_leaf() {
        let link = Element::new("a")
            .with_attribute("href", "https://example.com")
            .with_text("\n   Read   the\n   docs  \n");

        let normalized = normalized_clone(&link);
        assert_eq!(normalized.text_content(), "Read the docs");
        assert_eq!(normalized.attribute("href"), Some("https://example.com"));
        // Source is untouched
        assert!(link.text_content().starts_with('\n'));
    }

    #[test]
    fn test_normalized_nested_structure() {
        let quote = Element::new("blockquote")
            .with_text("\n  ")
            .with_child(Element::new("em").with_text("  So\n it "))
            .with_text(" goes.\n");

        let normalized = normalized_clone(&quote);
        assert_eq!(normalized.text_content(), "So it goes.");
        assert_eq!(normalized.children.len(), 3);
        assert_eq!(normalized.element_children().count(), 1);
    }

    #[test]
    fn test_normalized_empty_element() {
        let rule = Element::new("hr");
        assert_eq!(normalized_clone(&rule), rule);
    }

    #[test]
    fn test_block_accessors() {
        let text = ContentBlock::Text("Hi.".to_string());
        assert!(text.is_text());
        assert!(text.as_element().is_none());
        assert_eq!(text.plain_text(), "Hi.");

        let preserved = ContentBlock::Preserved(Element::new("a").with_text("link"));
        assert!(!preserved.is_text());
        assert_eq!(preserved.plain_text(), "link");
    }
}
