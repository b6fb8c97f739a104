//! Bidirectional Markdown ⇄ HTML conversion
//!
//!     This crate converts Markdown to HTML (as a fragment or a complete styled document) and
//!     HTML back to approximate Markdown, reporting statistics for every conversion.
//!
//!     This is a pure lib, that is, it powers the mdbridge CLI but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!     Configuration arrives as a [`ConversionConfig`] value, files are read by the caller.
//!
//! Architecture
//!
//!     Both directions implement the [`Converter`] trait and are selected through the
//!     [`ConverterRegistry`] by [`Mode`]. The forward direction goes through a small block IR
//!     (./ir/nodes.rs): a line scanner produces a flat block sequence, an HTML serializer walks
//!     it. The reverse direction is a fixed chain of regex substitutions over the HTML text.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── config.rs               # ConversionConfig, Mode, OutputFormat
//!     ├── converter.rs            # Converter trait, Conversion, ConversionReport
//!     ├── registry.rs             # ConverterRegistry for discovery and selection
//!     ├── transforms.rs           # convert() entry point
//!     ├── stats.rs                # Statistics for both directions
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # Block scanner
//!     │   │   ├── inline.rs       # Inline rule chain
//!     │   │   └── mod.rs          # MarkdownToHtml
//!     │   └── html
//!     │       ├── serializer.rs   # Blocks → HTML, TOC
//!     │       ├── document.rs     # Full document wrapping
//!     │       ├── sanitize.rs     # html5ever based sanitizer
//!     │       ├── to_markdown.rs  # HTML → Markdown rule chain
//!     │       └── mod.rs          # HtmlToMarkdown
//!     ├── ir                      # Block sequence
//!     └── common                  # Escaping, entity decoding, slugs
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Lossiness
//!
//!     Neither direction is a full CommonMark or HTML implementation. Converting Markdown to HTML
//!     and back yields approximate Markdown, not the original text.

pub mod common;
pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod stats;
pub mod transforms;

pub use common::{escape_html, slugify};
pub use config::{ConversionConfig, Mode, OutputFormat};
pub use converter::{Conversion, ConversionReport, Converter};
pub use error::ConvertError;
pub use formats::html::document::{wrap_document, DocumentOptions};
pub use formats::html::sanitize::sanitize_html;
pub use formats::html::serializer::render;
pub use formats::html::to_markdown::html_to_markdown;
pub use formats::markdown::inline::transform_inline;
pub use formats::markdown::parser::scan;
pub use formats::{default_css, HtmlToMarkdown, MarkdownToHtml};
pub use ir::nodes::{Block, BlockKind};
pub use registry::ConverterRegistry;
pub use stats::{compute_forward_stats, compute_reverse_stats, compute_stats, Statistics};
pub use transforms::{convert, convert_to_report};
