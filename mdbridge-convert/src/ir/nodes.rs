//! Core data structures for the Intermediate Representation (IR).

/// Structural classification of a block, with the data only some kinds carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Level is the count of leading `#` clamped to 1..=6 (no offset applied yet)
    Heading { level: u8 },
    Paragraph,
    /// Language is the fence info string, possibly empty
    CodeBlock { language: String },
    Table,
    Blockquote,
    UnorderedListItem,
    OrderedListItem,
    TaskListItem,
    HorizontalRule,
    EmptyLine,
}

/// One structurally classified unit of parsed Markdown.
///
/// `text` holds the raw payload: the heading title, paragraph text, list item text (task
/// items keep their `[x]`/`[ ]` prefix), the raw code body, or the raw table rows joined by
/// newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading { level }, text)
    }

    pub fn code_block(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            BlockKind::CodeBlock {
                language: language.into(),
            },
            text,
        )
    }

    pub fn is_list_item(&self) -> bool {
        matches!(
            self.kind,
            BlockKind::UnorderedListItem | BlockKind::OrderedListItem | BlockKind::TaskListItem
        )
    }
}
