//! # Inline Kinds
//!
//! Inline styles own their delimiter tokens. The parser reads the table in
//! [`DELIMITERS`]; it never hardcodes `*` or `~`.
//!
//! ## Precedence
//!
//! At a given position the table is tried top to bottom and only the first
//! token that matches is opened. `**` therefore wins over `*`, and an
//! unclosed `**` is literal text rather than falling back to `*`.

pub mod code_span;
pub mod emphasis;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic, Underline};
pub use strikethrough::Strikethrough;

use super::types::InlineKind;

/// A symmetric delimiter pair: the same token opens and closes the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub token: &'static [u8],
    pub kind: InlineKind,
}

/// All delimiters in precedence order.
pub const DELIMITERS: [Delimiter; 5] = [
    Delimiter {
        token: Bold::TOKEN,
        kind: InlineKind::Bold,
    },
    Delimiter {
        token: Underline::TOKEN,
        kind: InlineKind::Underline,
    },
    Delimiter {
        token: Italic::TOKEN,
        kind: InlineKind::Italic,
    },
    Delimiter {
        token: Strikethrough::TOKEN,
        kind: InlineKind::Strikethrough,
    },
    Delimiter {
        token: CodeSpan::TOKEN,
        kind: InlineKind::InlineCode,
    },
];

/// Looks up the delimiter token for a styled kind. `None` for plain text.
pub fn token_for(kind: InlineKind) -> Option<&'static str> {
    DELIMITERS
        .iter()
        .find(|d| d.kind == kind)
        .and_then(|d| std::str::from_utf8(d.token).ok())
}
