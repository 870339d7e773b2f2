//! End-to-end tests from HTML source to content blocks

use flowseg_core::{ContentBlock, CoreError, ExtractConfig};
use flowseg_html::{extract_html, parse_html, to_html, HtmlError, HtmlOptions, RootSelector};

fn blocks(html: &str) -> Vec<ContentBlock> {
    extract_html(html, &HtmlOptions::default())
        .unwrap()
        .into_blocks()
}

fn rendered(html: &str) -> Vec<String> {
    blocks(html)
        .iter()
        .map(|block| match block {
            ContentBlock::Text(text) => text.clone(),
            ContentBlock::Preserved(element) => to_html(element),
        })
        .collect()
}

#[test]
fn test_article_with_mixed_content() {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Ignored title.</title><style>p { color: red; }</style></head>
<body>
  <div class="post">
    <h1>A Title</h1>
    <div>First sentence. Second sentence with <a href="/link">a link</a>, inline.
    Third line</div>
    <hr>
    <p>Closing paragraph.</p>
  </div>
  <script>var hidden = "Nope.";</script>
</body>
</html>"#;

    assert_eq!(
        rendered(html),
        vec![
            "<h1>A Title</h1>".to_string(),
            "First sentence.".to_string(),
            "Second sentence with a link, inline.".to_string(),
            "Third line".to_string(),
            "<hr>".to_string(),
            "<p>Closing paragraph.</p>".to_string(),
        ]
    );
}

#[test]
fn test_line_break_tag_splits_prose() {
    let html = "<body><div>Line one<br>line two<br/>line three.</div></body>";
    assert_eq!(rendered(html), vec!["Line one", "line two", "line three."]);
}

#[test]
fn test_hidden_elements_are_skipped() {
    let html = r#"<body><div>
Shown text.
<span style="display: none">Hidden by style.</span>
<span hidden>Hidden by attribute.</span>
<span aria-hidden="true">Hidden from readers.</span>
<noscript>Enable scripts.</noscript>
More shown.
</div></body>"#;

    let extraction = extract_html(html, &HtmlOptions::default()).unwrap();
    assert_eq!(extraction.plain_texts(), vec!["Shown text.", "More shown."]);
    assert_eq!(extraction.stats.hidden_elements, 4);
}

#[test]
fn test_standalone_link_is_preserved() {
    let html = r#"<body><nav><a href="https://example.com/a?x=1&amp;y=2">
        Read more
    </a> about it</nav></body>"#;

    assert_eq!(
        rendered(html),
        vec![
            r#"<a href="https://example.com/a?x=1&amp;y=2">Read more</a>"#,
            "about it",
        ]
    );
}

#[test]
fn test_root_by_id() {
    let html = r#"<body>
<header>Site header.</header>
<main id="content"><section><p>Main text.</p><p>More.</p></section></main>
</body>"#;

    let options = HtmlOptions {
        root: "#content".parse().unwrap(),
        ..HtmlOptions::default()
    };
    let texts = extract_html(html, &options).unwrap().plain_texts();
    assert_eq!(texts, vec!["Main text.", "More."]);
}

#[test]
fn test_missing_root() {
    let options = HtmlOptions {
        root: RootSelector::Tag("article".to_string()),
        ..HtmlOptions::default()
    };
    let err = extract_html("<p>text</p>", &options).unwrap_err();
    assert_eq!(err, HtmlError::RootNotFound("article".to_string()));
}

#[test]
fn test_depth_limit_surfaces_as_extract_error() {
    let mut html = String::from("<body>");
    for _ in 0..20 {
        html.push_str("<div><span>x</span>");
    }
    html.push_str("</body>");

    let options = HtmlOptions {
        config: ExtractConfig {
            max_depth: 8,
            ..ExtractConfig::default()
        },
        ..HtmlOptions::default()
    };
    let err = extract_html(&html, &options).unwrap_err();
    assert_eq!(
        err,
        HtmlError::Extract(CoreError::DepthLimitExceeded { limit: 8 })
    );
}

#[test]
fn test_entities_are_decoded_in_text_blocks() {
    assert_eq!(
        rendered("<body><div>Fish &amp; chips. Tea &lt;hot&gt;!</div></body>"),
        vec!["Fish & chips.", "Tea <hot>!"]
    );
}

#[test]
fn test_pathological_nesting_is_rejected_without_overflow() {
    let levels = 30_000;
    let html = format!(
        "<body>{}x{}</body>",
        "<div>".repeat(levels),
        "</div>".repeat(levels)
    );

    let err = parse_html(&html).unwrap_err();
    assert_eq!(
        err,
        HtmlError::Extract(CoreError::DepthLimitExceeded { limit: 512 })
    );

    let err = extract_html(&html, &HtmlOptions::default()).unwrap_err();
    assert_eq!(
        err,
        HtmlError::Extract(CoreError::DepthLimitExceeded { limit: 512 })
    );
}

#[test]
fn test_nesting_at_the_default_ceiling_is_extracted() {
    // body is the root; the innermost div is a leaf one level below the
    // deepest container the walker accepts
    let levels = 513;
    let html = format!(
        "<body>{}deep text.{}</body>",
        "<div>".repeat(levels),
        "</div>".repeat(levels)
    );

    let blocks = extract_html(&html, &HtmlOptions::default())
        .unwrap()
        .into_blocks();
    assert_eq!(blocks.len(), 1);
    assert_eq!(to_html(blocks[0].as_element().unwrap()), "<div>deep text.</div>");
}

#[test]
fn test_comments_are_transparent_to_the_lookahead() {
    // With the comment dropped, the link's next sibling is ", more" and the
    // link reads as part of the sentence.
    let html = "<body><nav><a href=\"/x\">x</a><!-- c -->, more.</nav></body>";
    assert_eq!(rendered(html), vec!["x, more."]);
}
