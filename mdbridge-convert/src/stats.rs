//! Conversion statistics
//!
//! Statistics are derived fresh for every call and never cached. Sizes are byte lengths of
//! the input and output strings; `character_count` counts Unicode scalar values.
//!
//! The methodology depends on the direction. Forward conversions count headings, code
//! blocks, tables and list items from the scanned blocks. Reverse conversions have no block
//! sequence, so the same counts are re-derived from the Markdown output with line patterns.
//! The two are not unified and can disagree for equivalent documents.

use crate::ir::nodes::{Block, BlockKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static MARKDOWN_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("MARKDOWN_IMAGE: hardcoded regex is valid")
});
// Matches images too; images are subtracted to get the link count.
static MARKDOWN_LINK_OR_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]*\]\([^)]*\)").expect("MARKDOWN_LINK_OR_IMAGE: hardcoded regex is valid")
});
static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s").expect("HEADING_LINE: hardcoded regex is valid"));
static FENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*```").expect("FENCE_LINE: hardcoded regex is valid"));
static TABLE_SEPARATOR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*\|[\s:|-]*-[\s:|-]*\|\s*$")
        .expect("TABLE_SEPARATOR_LINE: hardcoded regex is valid")
});
static LIST_ITEM_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s").expect("LIST_ITEM_LINE: hardcoded regex is valid")
});

/// Counts describing one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub original_size: usize,
    pub processed_size: usize,
    pub word_count: usize,
    pub character_count: usize,
    pub line_count: usize,
    pub heading_count: usize,
    pub link_count: usize,
    pub image_count: usize,
    pub code_block_count: usize,
    pub table_count: usize,
    pub list_count: usize,
}

/// Compute statistics, choosing the methodology by whether a block sequence exists
pub fn compute_stats(input: &str, output: &str, blocks: Option<&[Block]>) -> Statistics {
    match blocks {
        Some(blocks) => compute_forward_stats(input, output, blocks),
        None => compute_reverse_stats(input, output),
    }
}

/// Statistics for Markdown → HTML, with structural counts taken from the blocks
pub fn compute_forward_stats(input: &str, output: &str, blocks: &[Block]) -> Statistics {
    let count = |pred: fn(&BlockKind) -> bool| blocks.iter().filter(|b| pred(&b.kind)).count();
    let (link_count, image_count) = count_links_and_images(input);

    Statistics {
        heading_count: count(|k| matches!(k, BlockKind::Heading { .. })),
        code_block_count: count(|k| matches!(k, BlockKind::CodeBlock { .. })),
        table_count: count(|k| matches!(k, BlockKind::Table)),
        list_count: blocks.iter().filter(|b| b.is_list_item()).count(),
        link_count,
        image_count,
        ..text_stats(input, output)
    }
}

/// Statistics for HTML → Markdown, with structural counts re-derived from the Markdown output
pub fn compute_reverse_stats(input: &str, output: &str) -> Statistics {
    let (link_count, image_count) = count_links_and_images(output);

    Statistics {
        heading_count: HEADING_LINE.find_iter(output).count(),
        code_block_count: FENCE_LINE.find_iter(output).count() / 2,
        table_count: TABLE_SEPARATOR_LINE.find_iter(output).count(),
        list_count: LIST_ITEM_LINE.find_iter(output).count(),
        link_count,
        image_count,
        ..text_stats(input, output)
    }
}

fn text_stats(input: &str, output: &str) -> Statistics {
    Statistics {
        original_size: input.len(),
        processed_size: output.len(),
        word_count: input.split_whitespace().count(),
        character_count: input.chars().count(),
        line_count: input.lines().count(),
        ..Statistics::default()
    }
}

fn count_links_and_images(markdown: &str) -> (usize, usize) {
    let images = MARKDOWN_IMAGE.find_iter(markdown).count();
    let all = MARKDOWN_LINK_OR_IMAGE.find_iter(markdown).count();
    (all.saturating_sub(images), images)
}
