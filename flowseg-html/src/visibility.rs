//! Attribute and inline-style based visibility
//!
//! There is no style engine here: an element counts as hidden when its tag
//! never renders, when it carries `hidden` or `aria-hidden="true"`, or when
//! its inline `style` sets `display: none` or `visibility: hidden`.

use flowseg_core::{Element, Visibility};
use std::collections::HashSet;

/// Tags whose content never renders as page text
pub const DEFAULT_HIDDEN_TAGS: &[&str] = &[
    "head", "script", "style", "template", "noscript", "title", "meta", "link",
];

/// Visibility predicate over HTML attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVisibility {
    hidden_tags: HashSet<String>,
}

impl Default for StyleVisibility {
    fn default() -> Self {
        Self::with_hidden_tags(DEFAULT_HIDDEN_TAGS.iter().copied())
    }
}

impl StyleVisibility {
    /// Create a predicate with the default hidden tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a predicate that hides exactly the given tags
    pub fn with_hidden_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hidden_tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Hidden tags, sorted
    pub fn hidden_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.hidden_tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Visibility for StyleVisibility {
    fn is_visible(&self, element: &Element) -> bool {
        if self.hidden_tags.contains(&element.tag.to_ascii_lowercase()) {
            return false;
        }
        if element.has_attribute("hidden") {
            return false;
        }
        if element
            .attribute("aria-hidden")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
        {
            return false;
        }
        !element.attribute("style").is_some_and(style_hides)
    }
}

/// Whether an inline style declaration list hides the element
fn style_hides(style: &str) -> bool {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .any(|(property, value)| {
            let property = property.trim().to_ascii_lowercase();
            let value = value.to_ascii_lowercase();
            let value = value.trim().trim_end_matches("!important").trim_end();

            match property.as_str() {
                "display" => value == "none",
                "visibility" => value == "hidden" || value == "collapse",
                _ => false,
            }
        })
}
