//! Shared helpers, plus tests for the text utilities and the public entry point.

use mdbridge_convert::common::decode_entities;
use mdbridge_convert::{
    convert, convert_to_report, escape_html, slugify, ConversionConfig, ConvertError, Mode,
};
use std::fs;
use std::path::PathBuf;

/// Convert Markdown to an HTML fragment with the given config
pub fn md_to_html_with(md: &str, config: &ConversionConfig) -> String {
    convert(md, config).expect("markdown converts").output
}

/// Convert Markdown to an HTML fragment with default settings
pub fn md_to_html(md: &str) -> String {
    md_to_html_with(md, &ConversionConfig::default())
}

/// Convert HTML to Markdown with default settings
pub fn html_to_md(html: &str) -> String {
    convert(html, &ConversionConfig::new(Mode::HtmlToMarkdown))
        .expect("html converts")
        .output
}

pub fn load_fixture(relative: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

#[test]
fn test_escape_then_decode_restores_text() {
    let text = r#"if a < b && c > "d" { 'e' }"#;
    assert_eq!(decode_entities(&escape_html(text)), text);
}

#[test]
fn test_slugify() {
    assert_eq!(slugify("Getting Started"), "getting-started");
    assert_eq!(slugify("What's New?"), "whats-new");
    assert_eq!(slugify("already-kebab"), "already-kebab");
}

#[test]
fn test_empty_input_contract() {
    for input in ["", "   ", "\n\n"] {
        assert_eq!(
            convert(input, &ConversionConfig::default()),
            Err(ConvertError::EmptyInput)
        );
        assert_eq!(
            convert(input, &ConversionConfig::new(Mode::HtmlToMarkdown)),
            Err(ConvertError::EmptyInput)
        );
    }
}

#[test]
fn test_report_json_shape_on_failure() {
    let report = convert_to_report("   ", &ConversionConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Please provide content to convert");
    assert!(json.get("output").is_none());
    assert!(json.get("stats").is_none());
}

#[test]
fn test_report_json_shape_on_success() {
    let report = convert_to_report("# Hi", &ConversionConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["output"], "<h1 id=\"hi\">Hi</h1>\n");
    assert_eq!(json["stats"]["headingCount"], 1);
    assert_eq!(json["stats"]["originalSize"], 4);
    assert!(json.get("error").is_none());
}

#[test]
fn test_conversion_is_stateless_across_calls() {
    // An unclosed list in one call must not leak into the next.
    let first = md_to_html("- dangling");
    let second = md_to_html("plain");
    assert_eq!(first, "<ul>\n<li>dangling</li>\n</ul>\n");
    assert_eq!(second, "<p>plain</p>\n");
}
