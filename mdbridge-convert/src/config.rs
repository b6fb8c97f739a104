//! Conversion configuration
//!
//! A [`ConversionConfig`] is supplied by the caller for one conversion call and is never
//! mutated by the pipeline. Every boolean strictly gates its rule: when a flag is off the
//! corresponding transformation does not fire at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    MarkdownToHtml,
    HtmlToMarkdown,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::MarkdownToHtml => "markdown-to-html",
            Mode::HtmlToMarkdown => "html-to-markdown",
        }
    }

    pub fn all() -> [Mode; 2] {
        [Mode::MarkdownToHtml, Mode::HtmlToMarkdown]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "markdown-to-html" | "md2html" => Ok(Mode::MarkdownToHtml),
            "html-to-markdown" | "html2md" => Ok(Mode::HtmlToMarkdown),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

/// Shape of the forward (Markdown → HTML) output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// A complete HTML document with the embedded stylesheet
    FullHtml,
    /// The rendered fragment only
    #[default]
    HtmlFragment,
}

/// Options for a single conversion call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub mode: Mode,
    pub enable_tables: bool,
    pub enable_strikethrough: bool,
    pub enable_task_lists: bool,
    pub enable_autolinks: bool,
    pub generate_toc: bool,
    pub sanitize_html: bool,
    pub output_format: OutputFormat,
    /// Shift applied to every heading level before clamping to 1..=6
    pub heading_offset: i32,
    /// Title for full-html output; falls back to the first heading
    pub title: Option<String>,
    /// Extra stylesheet appended after the built-in one in full-html output
    pub custom_css: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::MarkdownToHtml,
            enable_tables: true,
            enable_strikethrough: true,
            enable_task_lists: true,
            enable_autolinks: true,
            generate_toc: false,
            sanitize_html: false,
            output_format: OutputFormat::HtmlFragment,
            heading_offset: 0,
            title: None,
            custom_css: None,
        }
    }
}

impl ConversionConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_heading_offset(mut self, offset: i32) -> Self {
        self.heading_offset = offset;
        self
    }
}
