//! HTML adapter for flowseg
//!
//! Supplies the host-side capabilities the core extractor needs when the
//! input is an HTML page:
//! - `parser`: HTML5 parsing using html5ever into the core document model
//! - `visibility`: hidden-attribute and inline-style visibility predicate
//! - `root`: content root selection (`body`, a tag name, or `#id`)
//! - `serialize`: outer HTML for preserved elements

pub mod error;
pub mod parser;
pub mod root;
pub mod serialize;
pub mod visibility;

pub use error::{HtmlError, Result};
pub use parser::{parse_html, parse_html_with_depth};
pub use root::{find_root, RootSelector};
pub use serialize::to_html;
pub use visibility::{StyleVisibility, DEFAULT_HIDDEN_TAGS};

use flowseg_core::{Element, ExtractConfig, Extraction, Extractor};

/// Everything needed to extract blocks from an HTML page
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Element whose children are extracted
    pub root: RootSelector,
    /// Break tags and depth ceiling
    pub config: ExtractConfig,
    /// Visibility predicate
    pub visibility: StyleVisibility,
}

/// Parse `html` and extract the content blocks under the selected root
///
/// Documents nested beyond `options.config.max_depth` fail while parsing
/// with the same depth error the walker reports.
pub fn extract_html(html: &str, options: &HtmlOptions) -> Result<Extraction> {
    let document = parse_html_with_depth(html, options.config.max_depth)?;
    extract_document(&document, options)
}

/// Extract the content blocks under the selected root of a parsed document
pub fn extract_document(document: &Element, options: &HtmlOptions) -> Result<Extraction> {
    let root = find_root(document, &options.root)
        .ok_or_else(|| HtmlError::RootNotFound(options.root.to_string()))?;

    log::debug!("extracting from <{}> (selector '{}')", root.tag, options.root);

    let extraction = Extractor::new(&options.config, &options.visibility).extract(root)?;
    Ok(extraction)
}
