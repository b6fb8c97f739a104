//! Format implementations
//!
//! This module contains both conversion directions. Markdown scanning and inline span
//! handling live under `markdown`; HTML output, sanitizing and HTML import live under `html`.

pub mod html;
pub mod markdown;

pub use html::{default_css, HtmlToMarkdown};
pub use markdown::MarkdownToHtml;
