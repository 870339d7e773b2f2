//! Owned document tree handed to the extractor by the host
//!
//! The tree is plain data: the host builds it (from HTML, JSON or by hand)
//! before extraction and the extractor only ever reads it. Deep copies for
//! preserved elements come from `Clone`.

use serde::{Deserialize, Serialize};

/// A single attribute on an element, kept in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Attribute value (empty for boolean attributes)
    #[serde(default)]
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Raw character data
    Text(String),
    /// An element and its subtree
    Element(Element),
}

impl Node {
    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// The raw content if this is a text node
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(content) => Some(content),
            Node::Element(_) => None,
        }
    }

    /// The element if this is an element node
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }

    /// Concatenated text of this node and all of its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An element node: tag, attributes and ordered children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, conventionally lowercase
    pub tag: String,
    /// Attributes in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Builder: append a child node
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder: append a text child
    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::Text(content.into()));
        self
    }

    /// Whether this element's tag equals `tag`, ignoring ASCII case
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Look up an attribute value by name, ignoring ASCII case
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.as_str())
    }

    /// Whether the attribute is present at all
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// True when no child is an element (text children are allowed)
    pub fn is_leaf(&self) -> bool {
        !self
            .children
            .iter()
            .any(|child| matches!(child, Node::Element(_)))
    }

    /// Iterate over the element children only
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes in document order
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.collect_text(&mut content);
        content
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// First element in pre-order (starting with `self`) matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if predicate(self) {
            return Some(self);
        }
        self.element_children()
            .find_map(|child| child.find(predicate))
    }
}
