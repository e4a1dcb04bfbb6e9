use crate::parsing::{lines::LineRef, span::Span};

use super::{
    kinds::{BlockQuote, Heading},
    types::BlockKind,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of formatting: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Full byte span of this line.
    pub line: Span,
    /// What the line's prefix makes it.
    pub kind: BlockKind,
    /// Byte span of the content after stripping the prefix.
    pub content_span: Span,
}

/// Classifies individual lines for the block phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Checks run in a fixed order: blank, heading (deepest first),
    /// blockquote, and finally paragraph.
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let (kind, prefix_len) = if lr.text.trim().is_empty() {
            (BlockKind::LineBreak, lr.text.len())
        } else if let Some((kind, len)) = Heading::strip_prefix(lr.text) {
            (kind, len)
        } else if let Some(len) = BlockQuote::strip_prefix(lr.text) {
            (BlockKind::Blockquote, len)
        } else {
            (BlockKind::Paragraph, 0)
        };

        LineClass {
            line: lr.span,
            kind,
            content_span: Span::new(lr.span.start + prefix_len, lr.span.end),
        }
    }
}
