//! Complete-document wrapping for full-html output

use crate::common::escape_html;

const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

/// Options for the document shell around a rendered fragment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentOptions {
    pub title: String,
    /// Appended after the built-in stylesheet
    pub custom_css: Option<String>,
}

/// The stylesheet embedded in every full-html document
pub fn default_css() -> &'static str {
    BASELINE_CSS
}

/// Wrap a fragment in a complete HTML5 document. The fragment is placed verbatim in `<body>`.
pub fn wrap_document(fragment: &str, options: &DocumentOptions) -> String {
    let escaped_title = escape_html(&options.title);
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mdbridge">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{custom_css}
  </style>
</head>
<body>
{fragment}</body>
</html>
"#
    )
}
