//! HTML format implementation
//!
//! Export (blocks → HTML) lives in [`serializer`], with [`document`] providing the full-html
//! shell and its embedded stylesheet. Import (HTML → Markdown) lives in [`to_markdown`].
//! [`sanitize`] is shared by both directions.
//!
//! # Library Choice
//!
//! Sanitizing uses `html5ever` with the `markup5ever_rcdom` DOM: a browser-grade parser
//! that recovers from malformed markup the same way browsers do, so what is removed is what
//! a browser would have run. `url` decides whether an attribute URL uses an allowed scheme.
//!
//! Import deliberately does not use the DOM. It is a regex chain with best-effort output;
//! see the module docs of [`to_markdown`].

pub mod document;
pub mod sanitize;
pub mod serializer;
pub mod to_markdown;

pub use document::default_css;

use crate::config::{ConversionConfig, Mode};
use crate::converter::{Conversion, Converter};
use crate::error::ConvertError;
use crate::stats::compute_reverse_stats;

/// Converter for the HTML → Markdown direction
pub struct HtmlToMarkdown;

impl Converter for HtmlToMarkdown {
    fn mode(&self) -> Mode {
        Mode::HtmlToMarkdown
    }

    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML to Markdown (best effort)"
    }

    fn source_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(
        &self,
        source: &str,
        config: &ConversionConfig,
    ) -> Result<Conversion, ConvertError> {
        let output = if config.sanitize_html {
            to_markdown::html_to_markdown(&sanitize::sanitize_html(source)?)
        } else {
            to_markdown::html_to_markdown(source)
        };
        tracing::debug!(bytes = output.len(), "converted html to markdown");

        let stats = compute_reverse_stats(source, &output);
        Ok(Conversion { output, stats })
    }
}
