use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::kinds::token_for,
    span::Span,
};

/// Validates formatter output against the raw input.
///
/// Asserts that:
/// - There is one block per `\n`-separated line (none for empty input)
/// - Block spans are in bounds, on char boundaries, and in input order
/// - Each block span covers its whole line, up to but excluding the `\n`
/// - Content spans are contained within their block spans
/// - Inline spans tile the content span with no gaps or overlaps
/// - Plain runs match their source exactly; styled runs are
///   `token + text + token` in the source
/// - Line breaks carry no inline runs and only whitespace
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, blocks: &[BlockNode]) {
    let n = raw.len();
    let expected_blocks = if raw.is_empty() {
        0
    } else {
        raw.matches('\n').count() + 1
    };
    assert_eq!(
        blocks.len(),
        expected_blocks,
        "block count does not match line count"
    );

    let mut prev_end = 0usize;
    let mut line_start = 0usize;
    for (b, line) in blocks.iter().zip(raw.split('\n')) {
        assert_eq!(
            b.span,
            Span::new(line_start, line_start + line.len()),
            "block span does not cover its line {line:?}"
        );
        line_start += line.len() + 1;
        assert_span(raw, b.span, "block span");
        assert_span(raw, b.content_span, "content span");
        assert!(
            b.span.start >= prev_end,
            "blocks out of order: {:?} starts before {} (raw len: {})",
            b.span,
            prev_end,
            n
        );
        prev_end = b.span.end;
        assert!(
            b.span.contains(b.content_span),
            "content span not contained in block span: content {:?}, block {:?}",
            b.content_span,
            b.span
        );

        if b.kind == BlockKind::LineBreak {
            assert!(b.inline.is_empty(), "line break with inline runs: {b:?}");
            assert!(
                b.span.slice(raw).trim().is_empty(),
                "line break over non-blank line: {:?}",
                b.span
            );
            continue;
        }

        let mut cursor = b.content_span.start;
        for node in &b.inline {
            assert_span(raw, node.span, "inline span");
            assert_eq!(
                node.span.start, cursor,
                "inline runs do not tile content: gap or overlap at {cursor} in {:?}",
                b.content_span
            );
            cursor = node.span.end;

            let source = node.span.slice(raw);
            match token_for(node.kind) {
                None => assert_eq!(source, node.text, "plain run differs from source"),
                Some(token) => assert_eq!(
                    source,
                    format!("{token}{}{token}", node.text),
                    "styled run differs from source"
                ),
            }
        }
        assert_eq!(
            cursor, b.content_span.end,
            "inline runs stop short of content end in {:?}",
            b.content_span
        );
    }
}

fn assert_span(raw: &str, sp: Span, what: &str) {
    assert!(
        sp.start <= sp.end && sp.end <= raw.len(),
        "{what} out of bounds: {sp:?} (raw len: {})",
        raw.len()
    );
    assert!(
        raw.is_char_boundary(sp.start) && raw.is_char_boundary(sp.end),
        "{what} not on char boundary: {sp:?}"
    );
}
