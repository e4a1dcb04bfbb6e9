pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;


use blocks::{BlockKind, BlockNode, LineClassifier};
use lines::lines_with_spans;

/// Formats a post body into one [`BlockNode`] per `\n`-separated line.
///
/// Pure and total: any string is accepted, malformed markup degrades to
/// plain text, and identical input always yields identical output. Empty
/// input yields no blocks.
pub fn format(raw: &str) -> Vec<BlockNode> {
    if raw.is_empty() {
        return vec![];
    }

    let classifier = LineClassifier;
    lines_with_spans(raw)
        .map(|lr| {
            let lc = classifier.classify(&lr);
            let inline = if lc.kind == BlockKind::LineBreak {
                vec![]
            } else {
                inline::parse_inline(lc.content_span.start, lc.content_span.slice(raw))
            };
            BlockNode {
                kind: lc.kind,
                span: lc.line,
                content_span: lc.content_span,
                inline,
            }
        })
        .collect()
}
