use serde::Serialize;

use crate::parsing::{inline::InlineNode, span::Span};

/// The kind of a block. Every input line maps to exactly one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// `### ` heading.
    Heading3,
    /// `> ` quoted line.
    Blockquote,
    /// Any other non-blank line.
    Paragraph,
    /// An empty or whitespace-only line. Carries no inline content.
    LineBreak,
}

impl BlockKind {
    /// Heading level (1, 2 or 3), `None` for every other kind.
    #[must_use]
    pub fn level(self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            BlockKind::Blockquote | BlockKind::Paragraph | BlockKind::LineBreak => None,
        }
    }

    #[must_use]
    pub fn is_heading(self) -> bool {
        self.level().is_some()
    }
}

/// A formatted line: its kind, spans, and inline content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Byte span of the whole line, without its terminator.
    pub span: Span,
    /// Byte span left after the block prefix (`# `, `> `, ...) is stripped.
    pub content_span: Span,
    /// Inline nodes tiling `content_span`. Empty for [`BlockKind::LineBreak`].
    pub inline: Vec<InlineNode>,
}

impl BlockNode {
    /// Heading level, if this block is a heading.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.kind.level()
    }

    /// Display text of the block with all style markers removed.
    #[must_use]
    pub fn text(&self) -> String {
        self.inline.iter().map(|n| n.text.as_str()).collect()
    }
}
