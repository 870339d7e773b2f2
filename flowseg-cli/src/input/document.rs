//! Loading input files into document trees

use super::FileReader;
use crate::error::CliError;
use anyhow::{Context, Result};
use flowseg_core::{CoreError, Element, Node};
use flowseg_html::{find_root, parse_html_with_depth, RootSelector};
use serde::Deserialize;
use std::path::Path;

/// JSON levels one element adds: its node object, the element object and
/// its children array
const JSON_LEVELS_PER_ELEMENT: usize = 3;

/// Deepest JSON nesting a tree may use when the extractor walks containers
/// up to `max_depth` below the top element, plus one level of leaves
fn json_ceiling(max_depth: usize) -> usize {
    max_depth
        .saturating_add(1)
        .saturating_mul(JSON_LEVELS_PER_ELEMENT)
        .saturating_add(JSON_LEVELS_PER_ELEMENT + 1)
}

/// Deepest `{`/`[` nesting in `json`, ignoring brackets inside strings
fn json_nesting(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// How an input file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// HTML source, parsed with an HTML5 parser
    Html,
    /// A serialized document tree in JSON
    Tree,
}

impl DocumentKind {
    /// Pick the kind from the file extension; `.json` is a tree, anything else HTML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentKind::Tree,
            _ => DocumentKind::Html,
        }
    }
}

/// A loaded input document
#[derive(Debug, Clone)]
pub struct Document {
    /// Display name of the input, used in output
    pub source: String,
    /// How the input was interpreted
    pub kind: DocumentKind,
    /// Top of the document tree
    pub tree: Element,
}

impl Document {
    /// Read and parse the file at `path`
    ///
    /// `max_depth` is the extractor's depth ceiling; documents nested too
    /// deeply for it are rejected while loading.
    pub fn load(path: &Path, max_depth: usize) -> Result<Self> {
        let source = path.display().to_string();
        let content = FileReader::read_text(path)?;

        match DocumentKind::from_path(path) {
            DocumentKind::Html => Self::from_html(source, &content, max_depth),
            DocumentKind::Tree => Self::from_json(source, &content, max_depth),
        }
    }

    /// Parse HTML source
    pub fn from_html(source: impl Into<String>, html: &str, max_depth: usize) -> Result<Self> {
        let source = source.into();
        let tree = parse_html_with_depth(html, max_depth)
            .with_context(|| format!("Failed to parse HTML: {source}"))?;

        Ok(Self {
            source,
            kind: DocumentKind::Html,
            tree,
        })
    }

    /// Parse a JSON document tree whose top node must be an element
    pub fn from_json(source: impl Into<String>, json: &str, max_depth: usize) -> Result<Self> {
        let source = source.into();
        if json_nesting(json) > json_ceiling(max_depth) {
            return Err(CoreError::DepthLimitExceeded { limit: max_depth })
                .with_context(|| format!("Failed to parse document tree: {source}"));
        }

        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .with_context(|| format!("Failed to parse document tree: {source}"))?;
        deserializer
            .end()
            .with_context(|| format!("Trailing data after document tree: {source}"))?;

        match node {
            Node::Element(tree) => Ok(Self {
                source,
                kind: DocumentKind::Tree,
                tree,
            }),
            Node::Text(_) => Err(CliError::InvalidDocument(format!(
                "{source}: top-level node must be an element"
            ))
            .into()),
        }
    }

    /// The element whose children get extracted
    ///
    /// With no selector an HTML page starts from `<body>` while a tree
    /// starts from its top element.
    pub fn content_root(&self, selector: Option<&RootSelector>) -> Result<&Element> {
        let selector = match (selector, self.kind) {
            (Some(selector), _) => selector.clone(),
            (None, DocumentKind::Html) => RootSelector::default(),
            (None, DocumentKind::Tree) => return Ok(&self.tree),
        };

        find_root(&self.tree, &selector).ok_or_else(|| {
            CliError::RootNotFound {
                selector: selector.to_string(),
                document: self.source.clone(),
            }
            .into()
        })
    }
}
