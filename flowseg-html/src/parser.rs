//! HTML5 parsing into the flowseg document model

use crate::error::Result;
use flowseg_core::config::DEFAULT_MAX_DEPTH;
use flowseg_core::{Attribute, CoreError, Element, Node};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Levels above and below the walker's containers: `<html>` holds `<body>`,
/// and the deepest container may still hold leaf elements.
const FRAME_LEVELS: usize = 2;

/// Parse an HTML document and return its `<html>` element
///
/// Parsing follows the HTML5 algorithm: missing `<html>`, `<head>` and
/// `<body>` elements are synthesized. Comments, doctypes and processing
/// instructions are dropped; tag and attribute names are lowercase.
///
/// Uses the default depth ceiling; see [`parse_html_with_depth`].
pub fn parse_html(html: &str) -> Result<Element> {
    parse_html_with_depth(html, DEFAULT_MAX_DEPTH)
}

/// Parse an HTML document, rejecting nesting the extractor could not walk
///
/// An element more than `max_depth + 2` levels below `<html>` fails with
/// [`CoreError::DepthLimitExceeded`] carrying `max_depth`. Conversion uses
/// an explicit work stack, so pathological input never exhausts the call
/// stack.
pub fn parse_html_with_depth(html: &str, max_depth: usize) -> Result<Element> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find_map(OpenElement::new)
        .filter(|open| open.element.is("html"));

    match root {
        Some(root) => convert(root, max_depth),
        None => Ok(Element::new("html")),
    }
}

/// An element whose children are still being converted
struct OpenElement {
    element: Element,
    pending: std::vec::IntoIter<Handle>,
}

impl OpenElement {
    fn new(handle: &Handle) -> Option<Self> {
        let NodeData::Element { name, attrs, .. } = &handle.data else {
            return None;
        };

        let attributes = attrs
            .borrow()
            .iter()
            .map(|attr| Attribute::new(attr.name.local.to_string(), attr.value.to_string()))
            .collect();

        Some(Self {
            element: Element {
                tag: name.local.to_string(),
                attributes,
                children: Vec::new(),
            },
            pending: handle.children.borrow().clone().into_iter(),
        })
    }
}

fn convert(root: OpenElement, max_depth: usize) -> Result<Element> {
    let ceiling = max_depth.saturating_add(FRAME_LEVELS);
    let mut stack = vec![root];

    while let Some(top) = stack.last_mut() {
        if let Some(child) = top.pending.next() {
            match &child.data {
                NodeData::Text { contents } => {
                    top.element
                        .children
                        .push(Node::Text(contents.borrow().to_string()));
                }
                NodeData::Element { .. } => {
                    // the child would sit at depth `stack.len()` below <html>
                    if stack.len() > ceiling {
                        return Err(CoreError::DepthLimitExceeded { limit: max_depth }.into());
                    }
                    stack.extend(OpenElement::new(&child));
                }
                _ => {}
            }
            continue;
        }

        let Some(done) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.element.children.push(Node::Element(done.element)),
            None => return Ok(done.element),
        }
    }

    Ok(Element::new("html"))
}
