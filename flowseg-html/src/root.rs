//! Content root selection

use crate::error::HtmlError;
use flowseg_core::Element;
use std::fmt;
use std::str::FromStr;

/// Which element's children the extractor starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSelector {
    /// First element with this tag, in document order
    Tag(String),
    /// Element whose `id` attribute matches exactly
    Id(String),
}

impl Default for RootSelector {
    fn default() -> Self {
        RootSelector::Tag("body".to_string())
    }
}

impl RootSelector {
    /// Whether `element` matches this selector
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            RootSelector::Tag(tag) => element.is(tag),
            RootSelector::Id(id) => element.attribute("id") == Some(id.as_str()),
        }
    }
}

impl FromStr for RootSelector {
    type Err = HtmlError;

    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let selector = selector.trim();
        let valid_name = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':')
        };

        match selector.strip_prefix('#') {
            Some(id) if valid_name(id) => Ok(RootSelector::Id(id.to_string())),
            None if valid_name(selector) => Ok(RootSelector::Tag(selector.to_ascii_lowercase())),
            _ => Err(HtmlError::InvalidSelector(selector.to_string())),
        }
    }
}

impl fmt::Display for RootSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSelector::Tag(tag) => write!(f, "{tag}"),
            RootSelector::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// First element in pre-order (including `document` itself) matching `selector`
pub fn find_root<'a>(document: &'a Element, selector: &RootSelector) -> Option<&'a Element> {
    document.find(|element| selector.matches(element))
}
