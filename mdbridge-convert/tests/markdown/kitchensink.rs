//! Kitchensink document tests
//!
//! One fixture exercising every construct, converted to HTML and back.

use crate::common::{html_to_md, load_fixture, md_to_html};
use mdbridge_convert::{convert, ConversionConfig};

fn kitchensink() -> String {
    load_fixture("markdown/fixtures/kitchensink.md")
}

#[test]
fn test_kitchensink_blocks() {
    let html = md_to_html(&kitchensink());

    assert!(html.starts_with("<h1 id=\"kitchen-sink\">Kitchen Sink</h1>\n"));
    assert!(html.contains("<h2 id=\"links-media\">Links & Media</h2>"));
    assert!(html.contains(
        "<p>A paragraph with <strong>bold</strong>, <em>italic</em>, <del>struck</del> and <code>inline code</code>.</p>"
    ));
    assert!(html.contains("<blockquote>Quoted with <strong>strong</strong> words.</blockquote>"));
    assert!(html.contains("<hr>"));
    assert!(html.contains("<tr><td>render</td><td>html</td></tr>"));
    assert!(html.contains(
        "<pre><code class=\"language-python\">def greet(name):\n    return f&quot;&lt;hi {name}&gt;&quot;</code></pre>"
    ));
    assert!(html.ends_with("<p>Trailing paragraph.</p>\n"));
}

#[test]
fn test_kitchensink_inlines() {
    let html = md_to_html(&kitchensink());

    assert!(html.contains(
        "<a href=\"https://example.com/docs\" title=\"Docs\">the docs</a> or <img src=\"/img/logo.png\" alt=\"logo\">."
    ));
    assert!(html.contains(
        "Questions go to <a href=\"mailto:help@example.com\">help@example.com</a> or <a href=\"https://example.com/support\">https://example.com/support</a>."
    ));
}

#[test]
fn test_kitchensink_lists() {
    let html = md_to_html(&kitchensink());

    assert_eq!(html.matches("<li").count(), 6);
    assert_eq!(html.matches("<ol>").count(), 1);
    assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
    assert!(html.contains(
        "<li class=\"task-list-item\"><input type=\"checkbox\" checked disabled> shipped</li>"
    ));
}

#[test]
fn test_kitchensink_stats() {
    let source = kitchensink();
    let result = convert(&source, &ConversionConfig::default()).unwrap();
    let stats = result.stats;

    assert_eq!(stats.heading_count, 3);
    assert_eq!(stats.code_block_count, 1);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.list_count, 6);
    assert_eq!(stats.link_count, 1);
    assert_eq!(stats.image_count, 1);
    assert_eq!(stats.original_size, source.len());
    assert_eq!(stats.processed_size, result.output.len());
    assert_eq!(stats.line_count, source.lines().count());
}

#[test]
fn test_kitchensink_back_to_markdown() {
    let md = html_to_md(&md_to_html(&kitchensink()));

    assert!(md.starts_with("# Kitchen Sink\n\n"));
    assert!(md.contains("**bold**, *italic*, ~~struck~~ and `inline code`"));
    assert!(md.contains(r#"[the docs](https://example.com/docs "Docs") or ![logo](/img/logo.png)"#));
    assert!(md.contains("- apples\n- pears"));
    assert!(md.contains("- [x] shipped\n- [ ] pending"));
    assert!(md.contains("> Quoted with **strong** words."));
    assert!(md.contains("```python\ndef greet(name):\n    return f\"<hi {name}>\"\n```"));
    assert!(md.ends_with("Trailing paragraph."));
    assert!(!md.contains("<p>"));
    assert!(!md.contains("<li"));
}
