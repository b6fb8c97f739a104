//! Export tests for Markdown → HTML
//!
//! These tests verify the rendered HTML for each block and inline construct, and the effect
//! of every configuration flag.

use crate::common::{md_to_html, md_to_html_with};
use insta::assert_snapshot;
use mdbridge_convert::{convert, ConversionConfig, OutputFormat};
use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<style>.*?</style>").unwrap());

/// Full documents embed the whole stylesheet; keep snapshots focused on structure
fn snapshot_without_styles(html: &str) -> String {
    STYLE_BLOCK.replace(html, "<style>...</style>").into_owned()
}

fn full_html() -> ConversionConfig {
    ConversionConfig::default().with_output_format(OutputFormat::FullHtml)
}

// ============================================================================
// BLOCKS
// ============================================================================

#[test]
fn test_headings_get_slug_ids() {
    assert_eq!(
        md_to_html("# Getting Started\n## What's New?"),
        "<h1 id=\"getting-started\">Getting Started</h1>\n<h2 id=\"whats-new\">What's New?</h2>\n"
    );
}

#[test]
fn test_heading_offset_clamps_high() {
    let config = ConversionConfig::default().with_heading_offset(5);
    assert_eq!(
        md_to_html_with("# Title", &config),
        "<h6 id=\"title\">Title</h6>\n"
    );
}

#[test]
fn test_heading_offset_clamps_low() {
    let config = ConversionConfig::default().with_heading_offset(-5);
    assert_eq!(
        md_to_html_with("### Title", &config),
        "<h1 id=\"title\">Title</h1>\n"
    );
}

#[test]
fn test_heading_offset_shifts_within_range() {
    let config = ConversionConfig::default().with_heading_offset(1);
    assert_eq!(
        md_to_html_with("## Sub", &config),
        "<h3 id=\"sub\">Sub</h3>\n"
    );
}

#[test]
fn test_each_line_is_its_own_paragraph() {
    assert_eq!(
        md_to_html("first line\nsecond line\n\nthird"),
        "<p>first line</p>\n<p>second line</p>\n<p>third</p>\n"
    );
}

#[test]
fn test_lists_switch_and_close() {
    let html = md_to_html("- a\n- b\n\n1. one\n2. two\nafter");
    assert_snapshot!(html, @r#"
    <ul>
    <li>a</li>
    <li>b</li>
    </ul>
    <ol>
    <li>one</li>
    <li>two</li>
    </ol>
    <p>after</p>
    "#);
}

#[test]
fn test_task_list_checkboxes() {
    let html = md_to_html("- [x] done\n- [ ] pending");
    assert_snapshot!(html, @r#"
    <ul>
    <li class="task-list-item"><input type="checkbox" checked disabled> done</li>
    <li class="task-list-item"><input type="checkbox" disabled> pending</li>
    </ul>
    "#);
}

#[test]
fn test_task_items_dropped_when_disabled() {
    let config = ConversionConfig {
        enable_task_lists: false,
        ..ConversionConfig::default()
    };
    let html = md_to_html_with("- [x] done\n- [ ] pending\n- plain", &config);
    assert!(!html.contains("done"));
    assert!(!html.contains("pending"));
    assert!(!html.contains("checkbox"));
    assert_eq!(html, "<ul>\n<li>plain</li>\n</ul>\n");
}

#[test]
fn test_code_block_is_escaped_with_language_class() {
    assert_eq!(
        md_to_html("```html\n<p class=\"x\">'hi' & bye</p>\n```"),
        "<pre><code class=\"language-html\">&lt;p class=&quot;x&quot;&gt;&#39;hi&#39; &amp; bye&lt;/p&gt;</code></pre>\n"
    );
}

#[test]
fn test_code_block_keeps_lines_verbatim() {
    assert_eq!(
        md_to_html("```\n# not a heading\n    - not a list\n| not | a table |\n```"),
        "<pre><code># not a heading\n    - not a list\n| not | a table |</code></pre>\n"
    );
}

#[test]
fn test_unterminated_code_fence_is_flushed() {
    assert_eq!(
        md_to_html("intro\n```rust\nfn main() {}\nlet x = 1 < 2;"),
        "<p>intro</p>\n<pre><code class=\"language-rust\">fn main() {}\nlet x = 1 &lt; 2;</code></pre>\n"
    );
}

#[test]
fn test_blockquote_and_rules() {
    assert_eq!(
        md_to_html("> quoted *text*\n---\n***\n___"),
        "<blockquote>quoted <em>text</em></blockquote>\n<hr>\n<hr>\n<hr>\n"
    );
}

// ============================================================================
// INLINES
// ============================================================================

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(
        md_to_html("Nothing special here, just words."),
        "<p>Nothing special here, just words.</p>\n"
    );
}

#[test]
fn test_bold_and_italic_do_not_cross_nest() {
    assert_eq!(
        md_to_html("**a *b* c**"),
        "<p><strong>a <em>b</em> c</strong></p>\n"
    );
    assert_eq!(
        md_to_html("__strong__ and _soft_"),
        "<p><strong>strong</strong> and <em>soft</em></p>\n"
    );
}

#[test]
fn test_snake_case_is_not_italic() {
    assert_eq!(
        md_to_html("call my_long_function now"),
        "<p>call my_long_function now</p>\n"
    );
}

#[test]
fn test_strikethrough_gate() {
    assert_eq!(md_to_html("~~old~~ new"), "<p><del>old</del> new</p>\n");

    let config = ConversionConfig {
        enable_strikethrough: false,
        ..ConversionConfig::default()
    };
    assert_eq!(
        md_to_html_with("~~old~~ new", &config),
        "<p>~~old~~ new</p>\n"
    );
}

#[test]
fn test_inline_code_is_not_escaped() {
    assert_eq!(
        md_to_html("Use `<b>` tags"),
        "<p>Use <code><b></code> tags</p>\n"
    );
}

#[test]
fn test_links_and_images() {
    assert_eq!(
        md_to_html(r#"[site](https://example.com "Home") and ![logo](/logo.png)"#),
        "<p><a href=\"https://example.com\" title=\"Home\">site</a> and <img src=\"/logo.png\" alt=\"logo\"></p>\n"
    );
}

#[test]
fn test_image_with_title() {
    assert_eq!(
        md_to_html(r#"![chart](/c.svg "Q3")"#),
        "<p><img src=\"/c.svg\" alt=\"chart\" title=\"Q3\"></p>\n"
    );
}

#[test]
fn test_autolinks() {
    assert_eq!(
        md_to_html("Visit https://example.com. Mail me@example.com"),
        "<p>Visit <a href=\"https://example.com\">https://example.com</a>. Mail <a href=\"mailto:me@example.com\">me@example.com</a></p>\n"
    );
}

#[test]
fn test_autolinks_gate() {
    let config = ConversionConfig {
        enable_autolinks: false,
        ..ConversionConfig::default()
    };
    assert_eq!(
        md_to_html_with("Visit https://example.com", &config),
        "<p>Visit https://example.com</p>\n"
    );
}

#[test]
fn test_explicit_link_is_not_autolinked_again() {
    assert_eq!(
        md_to_html("[https://example.com](https://example.com)"),
        "<p><a href=\"https://example.com\">https://example.com</a></p>\n"
    );
}

// ============================================================================
// TABLE OF CONTENTS
// ============================================================================

#[test]
fn test_toc_is_prepended() {
    let config = ConversionConfig {
        generate_toc: true,
        ..ConversionConfig::default()
    };
    let html = md_to_html_with("# Intro\n## Setup Guide\ntext", &config);
    assert_snapshot!(html, @r##"
    <div class="table-of-contents">
    <ul>
    <li class="toc-level-1"><a href="#intro">Intro</a></li>
    <li class="toc-level-2"><a href="#setup-guide">Setup Guide</a></li>
    </ul>
    </div>
    <h1 id="intro">Intro</h1>
    <h2 id="setup-guide">Setup Guide</h2>
    <p>text</p>
    "##);
}

#[test]
fn test_toc_omitted_without_headings() {
    let config = ConversionConfig {
        generate_toc: true,
        ..ConversionConfig::default()
    };
    assert_eq!(md_to_html_with("just text", &config), "<p>just text</p>\n");
}

#[test]
fn test_toc_levels_follow_offset() {
    let config = ConversionConfig {
        generate_toc: true,
        heading_offset: 1,
        ..ConversionConfig::default()
    };
    let html = md_to_html_with("# Top", &config);
    assert!(html.contains("<li class=\"toc-level-2\"><a href=\"#top\">Top</a></li>"));
    assert!(html.contains("<h2 id=\"top\">Top</h2>"));
}

// ============================================================================
// DOCUMENT OUTPUT
// ============================================================================

#[test]
fn test_full_html_document() {
    let html = md_to_html_with("# My Doc\nBody & more", &full_html());
    assert_snapshot!(snapshot_without_styles(&html), @r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
      <meta charset="UTF-8">
      <meta name="viewport" content="width=device-width, initial-scale=1.0">
      <meta name="generator" content="mdbridge">
      <title>My Doc</title>
      <style>...</style>
    </head>
    <body>
    <h1 id="my-doc">My Doc</h1>
    <p>Body & more</p>
    </body>
    </html>
    "#);
}

#[test]
fn test_full_html_contains_fragment_verbatim() {
    let source = "# A\n- x\n- y\n\n> q";
    let fragment = md_to_html(source);
    let document = md_to_html_with(source, &full_html());

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains(&format!("<body>\n{fragment}</body>")));
    assert!(!fragment.contains("<html"));
    assert!(!fragment.contains("<body"));
}

#[test]
fn test_document_title_fallbacks() {
    let untitled = md_to_html_with("no headings", &full_html());
    assert!(untitled.contains("<title>Converted Document</title>"));

    let configured = ConversionConfig {
        title: Some("Handbook <v2>".to_string()),
        ..full_html()
    };
    let titled = md_to_html_with("# Ignored", &configured);
    assert!(titled.contains("<title>Handbook &lt;v2&gt;</title>"));
}

#[test]
fn test_custom_css_follows_baseline() {
    let config = ConversionConfig {
        custom_css: Some(".brand { color: teal; }".to_string()),
        ..full_html()
    };
    let html = md_to_html_with("text", &config);
    let baseline = html.find(".table-of-contents").unwrap();
    let custom = html.find(".brand { color: teal; }").unwrap();
    assert!(custom > baseline);
}

#[test]
fn test_custom_css_ignored_for_fragments() {
    let config = ConversionConfig {
        custom_css: Some(".brand { color: teal; }".to_string()),
        ..ConversionConfig::default()
    };
    assert_eq!(md_to_html_with("text", &config), "<p>text</p>\n");
}

#[test]
fn test_sanitize_removes_raw_script() {
    let config = ConversionConfig {
        sanitize_html: true,
        ..ConversionConfig::default()
    };
    let html = md_to_html_with(
        "<script>alert(1)</script>\n\nhello [x](javascript:void(0))",
        &config,
    );
    assert!(!html.contains("script"));
    assert!(!html.contains("javascript:"));
    assert!(html.contains("hello"));
}

#[test]
fn test_raw_html_kept_without_sanitize() {
    let html = md_to_html("<span onclick=\"x()\">hi</span>");
    assert_eq!(html, "<p><span onclick=\"x()\">hi</span></p>\n");
}

#[test]
fn test_stats_sizes_match_strings() {
    let source = "# Título\n\nUnicode — ok";
    let result = convert(source, &full_html()).unwrap();
    assert_eq!(result.stats.original_size, source.len());
    assert_eq!(result.stats.processed_size, result.output.len());
    assert_eq!(result.stats.character_count, source.chars().count());
    assert_eq!(result.stats.heading_count, 1);
}
