//! Markdown format implementation (Markdown → HTML)
//!
//! # Pipeline
//!
//! Markdown string → [`parser::scan`] → blocks → [`crate::formats::html::serializer`]
//! (running [`inline::transform_inline`] per block) → optional sanitizing → optional
//! document wrapping → statistics.
//!
//! # Element Mapping Table
//!
//! | Markdown                 | HTML                                                   | Notes                                     |
//! |--------------------------|--------------------------------------------------------|-------------------------------------------|
//! | `# Title`                | `<h1 id="title">`                                      | Offset applied, clamped to h1..h6         |
//! | Paragraph line           | `<p>`                                                  | One paragraph per line                    |
//! | ```` ```lang ````        | `<pre><code class="language-lang">`                    | Body entity-escaped                       |
//! | Pipe table               | `<table><thead><tbody>`                                | Gated by `enable_tables`                  |
//! | `- item` / `1. item`     | `<ul><li>` / `<ol><li>`                                | Flat list stack                           |
//! | `- [x] item`             | `<li class="task-list-item"><input type="checkbox">`   | Dropped when task lists are off           |
//! | `> quote`                | `<blockquote>`                                         | One blockquote per line                   |
//! | `---`, `***`, `___`      | `<hr>`                                                 |                                           |
//! | `**b**`, `*i*`, `~~s~~`  | `<strong>`, `<em>`, `<del>`                            | Strikethrough gated                       |
//! | `` `code` ``             | `<code>`                                               | Not escaped                               |
//! | `[t](u "x")`, `![a](u)`  | `<a href title>`, `<img src alt>`                      |                                           |
//! | bare URL / e-mail        | `<a href>` / `<a href="mailto:">`                      | Gated by `enable_autolinks`               |
//!
//! # Lossy Conversions
//!
//! - Consecutive paragraph lines are not joined; each line becomes its own `<p>`.
//! - Nested lists are flattened; indentation is ignored.
//! - Table column alignment is not carried into the output.
//! - A link whose label is an image, as in `[![alt](img)](url)`, keeps its brackets: links
//!   are resolved before images, so only the inner image is converted.
//! - `***x***` renders as `<strong><em>x</strong></em>`, since bold is resolved before italic.
//! - With sanitizing on, boolean attributes are re-serialized in explicit form, so a checked
//!   task box becomes `<input type="checkbox" checked="" disabled="">`.

pub mod inline;
pub mod parser;

use crate::config::{ConversionConfig, Mode, OutputFormat};
use crate::converter::{Conversion, Converter};
use crate::error::ConvertError;
use crate::formats::html::document::wrap_document;
use crate::formats::html::sanitize::sanitize_html;
use crate::formats::html::serializer::{document_options, render_fragment};
use crate::stats::compute_forward_stats;

/// Converter for the Markdown → HTML direction
pub struct MarkdownToHtml;

impl Converter for MarkdownToHtml {
    fn mode(&self) -> Mode {
        Mode::MarkdownToHtml
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown to HTML fragment or document"
    }

    fn source_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn convert(
        &self,
        source: &str,
        config: &ConversionConfig,
    ) -> Result<Conversion, ConvertError> {
        let blocks = parser::scan(source);
        tracing::debug!(blocks = blocks.len(), "scanned markdown");

        let mut fragment = render_fragment(&blocks, config);
        if config.sanitize_html {
            fragment = sanitize_html(&fragment)?;
        }

        let output = match config.output_format {
            OutputFormat::FullHtml => wrap_document(&fragment, &document_options(&blocks, config)),
            OutputFormat::HtmlFragment => fragment,
        };

        let stats = compute_forward_stats(source, &output, &blocks);
        Ok(Conversion { output, stats })
    }
}
