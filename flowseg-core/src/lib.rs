//! Sentence and standalone-block extraction from document trees
//!
//! This crate walks an owned document tree and re-segments its flowing text
//! into an ordered sequence of [`ContentBlock`]s: plain sentences, and
//! structural elements (thematic breaks, standalone links, leaf paragraphs)
//! that must be presented on their own rather than merged into prose.
//!
//! # Architecture
//!
//! - [`splitter`]: punctuation-driven sentence splitting
//! - [`extract`]: the tree walker, per-container line buffer and the
//!   inline-vs-standalone decision for leaf elements
//! - [`dom`] / [`visibility`]: the host-supplied tree and visibility predicate
//! - [`block`]: output blocks and clone-then-normalize for preserved elements
//!
//! # Example
//!
//! ```rust
//! use flowseg_core::dom::{Element, Node};
//! use flowseg_core::{extract, ContentBlock};
//!
//! let body = Element::new("body")
//!     .with_text("Hello world. This is great!\nDone")
//!     .with_child(Node::Element(Element::new("hr")));
//!
//! let extraction = extract(&body).unwrap();
//! assert_eq!(extraction.blocks[0], ContentBlock::Text("Hello world.".into()));
//! assert_eq!(extraction.stats.preserved_elements, 1);
//! ```

pub mod block;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod splitter;
pub mod visibility;

pub use block::{normalized_clone, ContentBlock};
pub use config::ExtractConfig;
pub use dom::{Attribute, Element, Node};
pub use error::{ConfigError, CoreError, Result};
pub use extract::{extract, Extraction, ExtractionStats, Extractor};
pub use splitter::split_sentences;
pub use visibility::{AlwaysVisible, Visibility};
