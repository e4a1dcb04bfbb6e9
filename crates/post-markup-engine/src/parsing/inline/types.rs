use serde::Serialize;

use crate::parsing::span::Span;

/// The style of an inline run.
///
/// Styles never nest: a styled run's text is shown verbatim even if it
/// contains further markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InlineKind {
    PlainText,
    /// `**bold**`
    Bold,
    /// `*underline*`
    Underline,
    /// `__italic__`
    Italic,
    /// `~~strikethrough~~`
    Strikethrough,
    /// `` `code` ``
    InlineCode,
}

/// A run of text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineNode {
    pub kind: InlineKind,
    /// Display text without delimiters.
    pub text: String,
    /// Source span including the delimiters.
    pub span: Span,
}

impl InlineNode {
    /// A plain text run covering `span` of `s`, where `s` starts at `base`.
    pub(crate) fn plain(s: &str, base: usize, span: Span) -> Self {
        Self {
            kind: InlineKind::PlainText,
            text: s[span.start - base..span.end - base].to_string(),
            span,
        }
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == InlineKind::PlainText
    }
}
