//! # post-markup-engine
//!
//! Formats post and comment bodies written in a small pseudo-markdown into
//! structured blocks, and renders those blocks for display.
//!
//! ```
//! use post_markup_engine::{BlockKind, InlineKind, format};
//!
//! let blocks = format("# Hello\n**bold** and normal");
//! assert_eq!(blocks[0].kind, BlockKind::Heading1);
//! assert_eq!(blocks[1].inline[0].kind, InlineKind::Bold);
//! assert_eq!(blocks[1].inline[0].text, "bold");
//! ```
//!
//! ## Syntax
//!
//! One block per line, chosen by prefix: `# `, `## `, `### `, `> `, blank
//! lines, everything else a paragraph. Inside a line: `**bold**`,
//! `*underline*`, `__italic__`, `~~strikethrough~~` and `` `code` ``.
//! Styles do not nest, and markers that never close are kept as text.

pub mod parsing;
pub mod render;

pub use parsing::{
    blocks::{BlockKind, BlockNode},
    format,
    inline::{InlineKind, InlineNode},
    span::Span,
};
