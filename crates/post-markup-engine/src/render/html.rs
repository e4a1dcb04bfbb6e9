use std::fmt::Write;

use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::{InlineKind, InlineNode},
};

/// Options for [`to_html_page`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub title: Option<String>,
    /// `href` of a stylesheet to link from the page head.
    pub stylesheet: Option<String>,
}

/// Renders blocks as an HTML fragment, one element per line.
///
/// Text is escaped for element content; nothing else is sanitized.
pub fn to_html(blocks: &[BlockNode]) -> String {
    let mut out = String::new();
    for b in blocks {
        match block_tag(b.kind) {
            None => out.push_str("<br>"),
            Some(tag) => {
                let _ = write!(out, "<{tag}>");
                for n in &b.inline {
                    push_inline(&mut out, n);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
        out.push('\n');
    }
    out
}

/// Renders blocks as a standalone HTML document.
pub fn to_html_page(blocks: &[BlockNode], opts: &PageOptions) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    if let Some(title) = &opts.title {
        let _ = writeln!(out, "<title>{}</title>", html_escape::encode_text(title));
    }
    if let Some(href) = &opts.stylesheet {
        let _ = writeln!(
            out,
            "<link rel=\"stylesheet\" href=\"{}\">",
            html_escape::encode_double_quoted_attribute(href)
        );
    }
    out.push_str("</head>\n<body>\n<article>\n");
    out.push_str(&to_html(blocks));
    out.push_str("</article>\n</body>\n</html>\n");
    out
}

fn block_tag(kind: BlockKind) -> Option<&'static str> {
    match kind {
        BlockKind::Heading1 => Some("h1"),
        BlockKind::Heading2 => Some("h2"),
        BlockKind::Heading3 => Some("h3"),
        BlockKind::Blockquote => Some("blockquote"),
        BlockKind::Paragraph => Some("p"),
        BlockKind::LineBreak => None,
    }
}

fn inline_tag(kind: InlineKind) -> Option<&'static str> {
    match kind {
        InlineKind::PlainText => None,
        InlineKind::Bold => Some("strong"),
        InlineKind::Underline => Some("u"),
        InlineKind::Italic => Some("em"),
        InlineKind::Strikethrough => Some("del"),
        InlineKind::InlineCode => Some("code"),
    }
}

fn push_inline(out: &mut String, n: &InlineNode) {
    let text = html_escape::encode_text(&n.text);
    match inline_tag(n.kind) {
        None => out.push_str(&text),
        Some(tag) => {
            let _ = write!(out, "<{tag}>{text}</{tag}>");
        }
    }
}
