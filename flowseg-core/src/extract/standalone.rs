//! Inline-vs-standalone decision for visible leaf elements

use crate::dom::Node;
use regex::Regex;
use std::sync::OnceLock;

/// Where a leaf element's content goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Merge the element's text into the running buffer
    Embedded,
    /// Flush the buffer and preserve the element as its own block
    Standalone,
}

/// Single terminator followed by whitespace, e.g. `". Next"`
fn terminator_then_space() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[.;?!]\s").expect("valid regex"))
}

/// First non-whitespace character is neither a word character nor whitespace
fn leading_symbol() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*[^A-Za-z0-9_\s]").expect("valid regex"))
}

/// Raw content of the sibling right after `index`, if it is a text node
///
/// Element siblings yield an empty string; nothing is skipped over. The
/// sibling's visibility is not consulted.
pub fn following_text(siblings: &[Node], index: usize) -> &str {
    siblings
        .get(index + 1)
        .and_then(Node::as_text)
        .unwrap_or("")
}

/// Decide how a leaf element joins the flow
///
/// `preceding` is the container's buffer so far and `following` the raw
/// text of the next sibling (see [`following_text`]).
pub fn decide(preceding: &str, following: &str) -> Placement {
    let leads_with_symbol = leading_symbol().is_match(following);

    let has_surrounding_text = !preceding.trim().is_empty()
        || (!following.trim().is_empty()
            && !terminator_then_space().is_match(following)
            && leads_with_symbol);

    if has_surrounding_text || leads_with_symbol {
        Placement::Embedded
    } else {
        Placement::Standalone
    }
}
