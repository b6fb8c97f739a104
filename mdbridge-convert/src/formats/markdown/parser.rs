//! Markdown block scanning (Markdown → IR)
//!
//! Converts Markdown source into a flat sequence of [`Block`] values in a single
//! left-to-right pass over the input lines. The scanner is stateless across calls.
//!
//! Rules are evaluated per line in a fixed priority order and the first match wins:
//!
//! 1. Code fence: a trimmed line starting with three backticks opens or closes a code
//!    block. While a fence is open every line is buffered verbatim and no other rule runs.
//! 2. Table: a line containing `|` starts (or continues) a table. The first line without a
//!    pipe closes it and is then scanned normally.
//! 3. Heading: leading `#` run, level clamped to 1..=6.
//! 4. Horizontal rule: three or more of the same `-`, `*` or `_` and nothing else.
//! 5. List item: `-`, `*`, `+` or `N.` followed by whitespace. A `[ ]`/`[x]` checkbox right
//!    after the marker makes it a task item.
//! 6. Blockquote: leading `>`.
//! 7. Empty line, otherwise paragraph.
//!
//! A code fence or table still open at end of input is flushed as a final block.

use crate::ir::nodes::{Block, BlockKind};
use once_cell::sync::Lazy;
use regex::Regex;

const FENCE: &str = "```";

static HORIZONTAL_RULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").expect("HORIZONTAL_RULE: hardcoded regex is valid")
});

static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?P<bullet>[*+-])|(?P<number>\d+)\.)\s+(?P<text>.*)$")
        .expect("LIST_ITEM: hardcoded regex is valid")
});

static TASK_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[[ x]\](?:\s|$)").expect("TASK_MARKER: hardcoded regex is valid")
});

/// Scan Markdown source into blocks
pub fn scan(source: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in source.lines() {
        scanner.push_line(line);
    }
    scanner.finish()
}

#[derive(Default)]
struct Scanner {
    blocks: Vec<Block>,
    code: Option<OpenFence>,
    table: Vec<String>,
}

struct OpenFence {
    language: String,
    lines: Vec<String>,
}

impl Scanner {
    fn push_line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(fence) = self.code.as_mut() {
            if trimmed.starts_with(FENCE) {
                self.close_fence();
            } else {
                fence.lines.push(line.to_string());
            }
            return;
        }

        if let Some(info) = trimmed.strip_prefix(FENCE) {
            self.flush_table();
            self.code = Some(OpenFence {
                language: info.trim().to_string(),
                lines: Vec::new(),
            });
            return;
        }

        if line.contains('|') {
            self.table.push(line.to_string());
            return;
        }
        self.flush_table();

        let block = classify_line(trimmed);
        self.blocks.push(block);
    }

    fn close_fence(&mut self) {
        if let Some(fence) = self.code.take() {
            self.blocks
                .push(Block::code_block(fence.language, fence.lines.join("\n")));
        }
    }

    fn flush_table(&mut self) {
        if !self.table.is_empty() {
            let rows = std::mem::take(&mut self.table);
            self.blocks.push(Block::new(BlockKind::Table, rows.join("\n")));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_fence();
        self.flush_table();
        self.blocks
    }
}

/// Classify a trimmed line that is neither inside a fence nor part of a table
fn classify_line(trimmed: &str) -> Block {
    if trimmed.starts_with('#') {
        let hashes = trimmed.chars().take_while(|c| *c == '#').count();
        let level = hashes.clamp(1, 6) as u8;
        let text = trimmed[hashes..].trim_start();
        return Block::heading(level, text);
    }

    if HORIZONTAL_RULE.is_match(trimmed) {
        return Block::new(BlockKind::HorizontalRule, "");
    }

    if let Some(caps) = LIST_ITEM.captures(trimmed) {
        let text = caps.name("text").map_or("", |m| m.as_str());
        let kind = if TASK_MARKER.is_match(text) {
            BlockKind::TaskListItem
        } else if caps.name("number").is_some() {
            BlockKind::OrderedListItem
        } else {
            BlockKind::UnorderedListItem
        };
        return Block::new(kind, text);
    }

    if let Some(rest) = trimmed.strip_prefix('>') {
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        return Block::new(BlockKind::Blockquote, text);
    }

    if trimmed.is_empty() {
        Block::new(BlockKind::EmptyLine, "")
    } else {
        Block::new(BlockKind::Paragraph, trimmed)
    }
}
