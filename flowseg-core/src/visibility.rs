//! Visibility predicate supplied by the host

use crate::dom::Element;

/// Decides whether an element takes part in extraction at all
///
/// Invisible elements are skipped before dispatch: neither their text nor
/// their structure contributes to the output, and they are not traversed.
pub trait Visibility: Send + Sync {
    /// Whether `element` is rendered
    fn is_visible(&self, element: &Element) -> bool;
}

/// Treats every element as visible
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl Visibility for AlwaysVisible {
    fn is_visible(&self, _element: &Element) -> bool {
        true
    }
}

impl<F> Visibility for F
where
    F: Fn(&Element) -> bool + Send + Sync,
{
    fn is_visible(&self, element: &Element) -> bool {
        self(element)
    }
}
