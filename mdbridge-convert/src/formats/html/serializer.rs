//! HTML serialization (IR → HTML export)
//!
//! Walks the scanned blocks once and emits an HTML fragment.
//! Pipeline: Markdown string → blocks → inline transform per block → HTML string
//!
//! The only state carried across blocks is a list stack local to one [`render_fragment`]
//! call. A list item whose tag differs from the top of the stack pushes a new list; any
//! non-list block closes every open list. Unclosed lists are closed at the end of the pass,
//! so malformed input degrades into imperfect markup rather than an error.

use crate::common::{escape_html, slugify};
use crate::config::{ConversionConfig, OutputFormat};
use crate::formats::html::document::{wrap_document, DocumentOptions};
use crate::formats::markdown::inline::transform_inline;
use crate::ir::nodes::{Block, BlockKind};
use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s|:-]+$").expect("SEPARATOR_ROW: hardcoded regex is valid"));

const CHECKED_MARKER: &str = "[x]";
const DEFAULT_TITLE: &str = "Converted Document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListTag {
    Unordered,
    Ordered,
}

impl ListTag {
    fn name(self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
        }
    }
}

/// A heading recorded for the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub title: String,
    pub id: String,
}

/// Render blocks to HTML, wrapping in a complete document when configured
pub fn render(blocks: &[Block], config: &ConversionConfig) -> String {
    let fragment = render_fragment(blocks, config);
    match config.output_format {
        OutputFormat::FullHtml => wrap_document(&fragment, &document_options(blocks, config)),
        OutputFormat::HtmlFragment => fragment,
    }
}

/// Render blocks to an HTML fragment, with the table of contents prepended when enabled
pub fn render_fragment(blocks: &[Block], config: &ConversionConfig) -> String {
    let mut html = String::new();
    let mut list_stack: Vec<ListTag> = Vec::new();
    let mut toc: Vec<TocEntry> = Vec::new();

    for block in blocks {
        if !block.is_list_item() {
            close_lists(&mut html, &mut list_stack);
        }
        match &block.kind {
            BlockKind::UnorderedListItem => {
                open_list(&mut html, &mut list_stack, ListTag::Unordered);
                html.push_str(&format!(
                    "<li>{}</li>\n",
                    transform_inline(&block.text, config)
                ));
            }
            BlockKind::OrderedListItem => {
                open_list(&mut html, &mut list_stack, ListTag::Ordered);
                html.push_str(&format!(
                    "<li>{}</li>\n",
                    transform_inline(&block.text, config)
                ));
            }
            BlockKind::TaskListItem => {
                // Dropped outright when task lists are off; list state is untouched.
                if config.enable_task_lists {
                    open_list(&mut html, &mut list_stack, ListTag::Unordered);
                    html.push_str(&render_task_item(&block.text, config));
                }
            }
            BlockKind::Heading { level } => {
                let (heading, entry) = render_heading(*level, &block.text, config);
                html.push_str(&heading);
                if config.generate_toc {
                    toc.push(entry);
                }
            }
            BlockKind::Paragraph => {
                html.push_str(&format!(
                    "<p>{}</p>\n",
                    transform_inline(&block.text, config)
                ));
            }
            BlockKind::CodeBlock { language } => {
                html.push_str(&render_code_block(language, &block.text));
            }
            BlockKind::Table => {
                if config.enable_tables {
                    html.push_str(&render_table(&block.text, config));
                }
            }
            BlockKind::Blockquote => {
                html.push_str(&format!(
                    "<blockquote>{}</blockquote>\n",
                    transform_inline(&block.text, config)
                ));
            }
            BlockKind::HorizontalRule => html.push_str("<hr>\n"),
            BlockKind::EmptyLine => {}
        }
    }
    close_lists(&mut html, &mut list_stack);

    if config.generate_toc && !toc.is_empty() {
        let mut with_toc = render_toc(&toc);
        with_toc.push_str(&html);
        return with_toc;
    }
    html
}

/// Apply the heading offset and clamp the result to a valid HTML heading level
pub fn effective_heading_level(level: u8, offset: i32) -> u8 {
    i32::from(level).saturating_add(offset).clamp(1, 6) as u8
}

/// Pick the document title: configured title, else the first heading, else a default
pub fn document_title(blocks: &[Block], config: &ConversionConfig) -> String {
    if let Some(title) = config.title.as_deref().filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    blocks
        .iter()
        .find(|b| matches!(b.kind, BlockKind::Heading { .. }))
        .map(|b| b.text.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

pub(crate) fn document_options(blocks: &[Block], config: &ConversionConfig) -> DocumentOptions {
    DocumentOptions {
        title: document_title(blocks, config),
        custom_css: config.custom_css.clone(),
    }
}

fn open_list(html: &mut String, stack: &mut Vec<ListTag>, tag: ListTag) {
    if stack.last() != Some(&tag) {
        html.push_str(&format!("<{}>\n", tag.name()));
        stack.push(tag);
    }
}

fn close_lists(html: &mut String, stack: &mut Vec<ListTag>) {
    while let Some(tag) = stack.pop() {
        html.push_str(&format!("</{}>\n", tag.name()));
    }
}

fn render_task_item(text: &str, config: &ConversionConfig) -> String {
    let checked = text.starts_with(CHECKED_MARKER);
    // The scanner guarantees a three-character `[ ]`/`[x]` prefix.
    let body = text.get(3..).unwrap_or("").trim_start();
    let checkbox = if checked {
        r#"<input type="checkbox" checked disabled>"#
    } else {
        r#"<input type="checkbox" disabled>"#
    };
    format!(
        "<li class=\"task-list-item\">{checkbox} {}</li>\n",
        transform_inline(body, config)
    )
}

fn render_heading(level: u8, text: &str, config: &ConversionConfig) -> (String, TocEntry) {
    let level = effective_heading_level(level, config.heading_offset);
    let id = slugify(text);
    let html = format!(
        "<h{level} id=\"{id}\">{}</h{level}>\n",
        transform_inline(text, config)
    );
    let entry = TocEntry {
        level,
        title: text.to_string(),
        id,
    };
    (html, entry)
}

fn render_code_block(language: &str, code: &str) -> String {
    let body = escape_html(code);
    if language.is_empty() {
        format!("<pre><code>{body}</code></pre>\n")
    } else {
        format!(
            "<pre><code class=\"language-{}\">{body}</code></pre>\n",
            escape_html(language)
        )
    }
}

fn render_table(raw: &str, config: &ConversionConfig) -> String {
    let rows: Vec<Vec<String>> = raw
        .lines()
        .filter(|line| !SEPARATOR_ROW.is_match(line))
        .map(|line| split_row(line, config))
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut html = String::from("<table>\n<thead>\n<tr>");
    for cell in header {
        html.push_str(&format!("<th>{cell}</th>"));
    }
    html.push_str("</tr>\n</thead>\n");

    if !body.is_empty() {
        html.push_str("<tbody>\n");
        for row in body {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{cell}</td>"));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n");
    }
    html.push_str("</table>\n");
    html
}

fn split_row(line: &str, config: &ConversionConfig) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed
        .split('|')
        .map(|cell| transform_inline(cell.trim(), config))
        .collect()
}

fn render_toc(entries: &[TocEntry]) -> String {
    let mut html = String::from("<div class=\"table-of-contents\">\n<ul>\n");
    for entry in entries {
        html.push_str(&format!(
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
            entry.level,
            entry.id,
            escape_html(&entry.title)
        ));
    }
    html.push_str("</ul>\n</div>\n");
    html
}
