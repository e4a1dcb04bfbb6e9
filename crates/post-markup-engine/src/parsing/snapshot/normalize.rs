use std::fmt;

use crate::parsing::{blocks::BlockNode, span::Span};

/// Maximum characters of source shown per block line in a snapshot.
const BLOCK_PREVIEW_CHARS: usize = 80;

/// Textual snapshot of formatted blocks.
///
/// Renders one line per block followed by one indented line per inline run:
///
/// ```text
/// Heading1 0..7 "# Hello"
///   PlainText 2..7 "Hello"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnap {
    pub kind: String,
    pub span: Span,
    /// Source text of the line, truncated for readability.
    pub source: String,
    pub inline: Vec<InlineSnap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSnap {
    pub kind: String,
    pub span: Span,
    pub text: String,
}

/// Converts formatted blocks into a [`Snap`].
pub fn normalize(raw: &str, blocks: &[BlockNode]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            kind: format!("{:?}", b.kind),
            span: b.span,
            source: truncate_chars(b.span.slice(raw), BLOCK_PREVIEW_CHARS),
            inline: b
                .inline
                .iter()
                .map(|n| InlineSnap {
                    kind: format!("{:?}", n.kind),
                    span: n.span,
                    text: n.text.clone(),
                })
                .collect(),
        })
        .collect();

    Snap { blocks }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            writeln!(
                f,
                "{} {}..{} {:?}",
                b.kind, b.span.start, b.span.end, b.source
            )?;
            for n in &b.inline {
                writeln!(f, "  {} {}..{} {:?}", n.kind, n.span.start, n.span.end, n.text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::format;

    #[test]
    fn display_lists_blocks_then_runs() {
        let raw = "# Hi *there*";
        let snap = normalize(raw, &format(raw));
        insta::assert_snapshot!(snap.to_string(), @r##"
        Heading1 0..12 "# Hi *there*"
          PlainText 2..5 "Hi "
          Underline 5..12 "there"
        "##);
    }

    #[test]
    fn long_lines_are_truncated_on_char_boundary() {
        let line = "é".repeat(100);
        let snap = normalize(&line, &format(&line));
        assert_eq!(snap.blocks[0].source.chars().count(), 83);
        assert!(snap.blocks[0].source.ends_with("..."));
        // Inline text is never truncated
        assert_eq!(snap.blocks[0].inline[0].text, line);
    }
}
