//! End-to-end extraction tests over hand-built trees

use flowseg_core::{
    extract, normalized_clone, AlwaysVisible, ContentBlock, CoreError, Element, ExtractConfig,
    Extractor, Node,
};

fn text(s: &str) -> ContentBlock {
    ContentBlock::Text(s.to_string())
}

fn preserved(element: Element) -> ContentBlock {
    ContentBlock::Preserved(element)
}

#[test]
fn test_newline_forces_hard_boundary() {
    let body = Element::new("body").with_text("A.\nB");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(blocks, vec![text("A."), text("B")]);
}

#[test]
fn test_leaf_followed_by_words_is_standalone() {
    let body = Element::new("body")
        .with_child(Element::new("a").with_attribute("href", "/docs").with_text("Docs"))
        .with_text(" More text");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(
        blocks,
        vec![
            preserved(Element::new("a").with_attribute("href", "/docs").with_text("Docs")),
            text("More text"),
        ]
    );
}

#[test]
fn test_leaf_followed_by_punctuation_is_embedded() {
    let body = Element::new("body")
        .with_child(Element::new("em").with_text("Quickly"))
        .with_text(", continued");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(blocks, vec![text("Quickly, continued")]);
}

#[test]
fn test_thematic_break_keeps_document_position() {
    let rule = Element::new("hr");
    let cases = [
        Element::new("body")
            .with_text("Open sentence")
            .with_child(rule.clone())
            .with_text("closing."),
        Element::new("body")
            .with_text("Done.")
            .with_child(rule.clone())
            .with_text("Again."),
        Element::new("body").with_child(rule.clone()),
    ];

    let expected = [
        vec![text("Open sentence"), preserved(rule.clone()), text("closing.")],
        vec![text("Done."), preserved(rule.clone()), text("Again.")],
        vec![preserved(rule.clone())],
    ];

    for (body, expected) in cases.iter().zip(expected) {
        assert_eq!(extract(body).unwrap().into_blocks(), expected);
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let body = Element::new("body")
        .with_child(
            Element::new("article")
                .with_child(Element::new("h1").with_text("Title"))
                .with_text("\nFirst. Second")
                .with_child(Element::new("a").with_text("link"))
                .with_text("!\n"),
        )
        .with_child(Element::new("hr"));

    let first = extract(&body).unwrap();
    let second = extract(&body).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_source_tree_is_not_mutated() {
    let body = Element::new("body")
        .with_child(Element::new("p").with_text("\n  spaced   out\n"))
        .with_child(Element::new("hr"));
    let snapshot = body.clone();

    let _ = extract(&body).unwrap();
    assert_eq!(body, snapshot);
}

#[test]
fn test_invisible_elements_contribute_nothing() {
    let config = ExtractConfig::default();
    let visibility = |el: &Element| el.attribute("hidden").is_none();

    let body = Element::new("body")
        .with_text("Visible start. ")
        .with_child(
            Element::new("div")
                .with_attribute("hidden", "")
                .with_child(Element::new("p").with_text("Secret one. Secret two."))
                .with_child(Element::new("hr")),
        )
        .with_child(Element::new("span").with_attribute("hidden", "").with_text("ghost"))
        .with_text("Visible end.");

    let extraction = Extractor::new(&config, &visibility).extract(&body).unwrap();
    assert_eq!(
        extraction.blocks,
        vec![text("Visible start."), text("Visible end.")]
    );
    assert_eq!(extraction.stats.hidden_elements, 2);
    assert!(extraction
        .plain_texts()
        .iter()
        .all(|t| !t.contains("Secret") && !t.contains("ghost")));
}

// The lookahead reads the next sibling's raw text without asking the
// visibility predicate; only the element being dispatched is checked.
// Whether the lookahead should also respect visibility is unresolved, so
// this pins the current behavior.
#[test]
fn test_lookahead_ignores_visibility() {
    let config = ExtractConfig::default();
    let calls = std::sync::atomic::AtomicUsize::new(0);
    let visibility = |_: &Element| {
        calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        true
    };

    let body = Element::new("body")
        .with_child(Element::new("b").with_text("Bold"))
        .with_text(", trailing");

    let blocks = Extractor::new(&config, &visibility)
        .extract(&body)
        .unwrap()
        .into_blocks();
    assert_eq!(blocks, vec![text("Bold, trailing")]);
    // Only the <b> element was checked; the lookahead did not consult it
    assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn test_lookahead_does_not_skip_element_siblings() {
    let body = Element::new("body")
        .with_child(Element::new("a").with_text("first"))
        .with_child(Element::new("a").with_text("second"))
        .with_text(", and more");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(
        blocks,
        vec![
            // Next sibling is an element, so there is no following text
            preserved(Element::new("a").with_text("first")),
            // This one sees ", and more" and is embedded
            text("second, and more"),
        ]
    );
}

#[test]
fn test_line_break_element_splits_without_block() {
    let body = Element::new("body")
        .with_text("Roses are red")
        .with_child(Element::new("br"))
        .with_text("violets are blue");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(blocks, vec![text("Roses are red"), text("violets are blue")]);
}

#[test]
fn test_nested_containers_keep_order() {
    let body = Element::new("body")
        .with_text("Intro text.")
        .with_child(
            Element::new("section")
                .with_child(Element::new("h2").with_text("Heading"))
                .with_child(
                    Element::new("div")
                        .with_text("Deep one. Deep")
                        .with_child(Element::new("i").with_text("two"))
                        .with_text("."),
                ),
        )
        .with_text("Outro.");

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(
        blocks,
        vec![
            text("Intro text."),
            preserved(Element::new("h2").with_text("Heading")),
            text("Deep one."),
            text("Deeptwo."),
            text("Outro."),
        ]
    );
}

#[test]
fn test_preserved_elements_are_normalized_clones() {
    let link = Element::new("a")
        .with_attribute("href", "https://example.com")
        .with_text("\n    Example\n    site\n");
    let body = Element::new("body").with_child(link.clone());

    let blocks = extract(&body).unwrap().into_blocks();
    assert_eq!(blocks, vec![preserved(normalized_clone(&link))]);
    assert_eq!(blocks[0].plain_text(), "Example site");
}

#[test]
fn test_whitespace_only_content_yields_nothing() {
    let body = Element::new("body")
        .with_text("\n   \n")
        .with_child(Element::new("div").with_child(Element::new("br")).with_text("   "))
        .with_text("\t");

    assert!(extract(&body).unwrap().blocks.is_empty());
}

#[test]
fn test_depth_ceiling() {
    let mut tree = Element::new("p").with_text("bottom");
    for _ in 0..10 {
        tree = Element::new("div").with_child(tree);
    }
    let root = Element::new("body").with_child(tree);

    let shallow = ExtractConfig {
        max_depth: 5,
        ..ExtractConfig::default()
    };
    let err = Extractor::new(&shallow, &AlwaysVisible)
        .extract(&root)
        .unwrap_err();
    assert_eq!(err, CoreError::DepthLimitExceeded { limit: 5 });

    let blocks = extract(&root).unwrap().into_blocks();
    assert_eq!(blocks, vec![preserved(Element::new("p").with_text("bottom"))]);
}

#[test]
fn test_custom_break_tags() {
    let config = ExtractConfig::from_toml_str(
        r#"
line_break_tags = ["br", "wbr"]
thematic_break_tags = ["hr", "figure"]
"#,
    )
    .unwrap();

    let figure = Element::new("figure").with_text("Chart");
    let body = Element::new("body")
        .with_text("left")
        .with_child(Element::new("wbr"))
        .with_text("right")
        .with_child(figure.clone())
        .with_text("tail");

    let blocks = Extractor::new(&config, &AlwaysVisible)
        .extract(&body)
        .unwrap()
        .into_blocks();
    assert_eq!(
        blocks,
        vec![text("left"), text("right"), preserved(figure), text("tail")]
    );
}

#[test]
fn test_json_tree_input() {
    let json = r#"{
        "element": {
            "tag": "main",
            "children": [
                {"text": "From JSON. "},
                {"element": {"tag": "hr"}},
                {"text": "Works"}
            ]
        }
    }"#;

    let node: Node = serde_json::from_str(json).unwrap();
    let root = node.as_element().unwrap();
    let blocks = extract(root).unwrap().into_blocks();
    assert_eq!(
        blocks,
        vec![text("From JSON."), preserved(Element::new("hr")), text("Works")]
    );
}
