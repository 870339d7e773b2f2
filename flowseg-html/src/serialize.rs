//! Outer-HTML serialization for preserved elements

use flowseg_core::{Element, Node};

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(element: &Element) -> bool {
    VOID_ELEMENTS.iter().any(|tag| element.is(tag))
}

/// Serialize `element` and its subtree as HTML
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        if !attr.value.is_empty() {
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
            out.push('"');
        }
    }
    out.push('>');

    if is_void(element) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Element(nested) => write_element(nested, out),
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element() {
        assert_eq!(to_html(&Element::new("hr")), "<hr>");
        assert_eq!(
            to_html(&Element::new("img").with_attribute("src", "a.png")),
            r#"<img src="a.png">"#
        );
    }

    #[test]
    fn test_nested_element() {
        let link = Element::new("a")
            .with_attribute("href", "/x")
            .with_child(Element::new("em").with_text("hi"))
            .with_text(" there");
        assert_eq!(to_html(&link), r#"<a href="/x"><em>hi</em> there</a>"#);
    }

    #[test]
    fn test_escaping() {
        let element = Element::new("span")
            .with_attribute("title", r#"say "hi" & go"#)
            .with_text("1 < 2 & 3 > 2");
        assert_eq!(
            to_html(&element),
            r#"<span title="say &quot;hi&quot; &amp; go">1 &lt; 2 &amp; 3 &gt; 2</span>"#
        );
    }

    #[test]
    fn test_boolean_attribute() {
        let input = Element::new("input").with_attribute("disabled", "");
        assert_eq!(to_html(&input), "<input disabled>");
    }
}
