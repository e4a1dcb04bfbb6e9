use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{DELIMITERS, Delimiter},
    types::InlineNode,
};

/// Splits a block's content into plain and styled runs.
///
/// # Arguments
/// - `base`: Byte offset in the raw input where `s` begins (for absolute spans)
/// - `s`: The block content, prefix already stripped
///
/// # Matching
/// At each position the first delimiter in [`DELIMITERS`] whose token
/// matches is opened, and the nearest following copy of the same token
/// closes it. An opener with no closer is kept as literal text and scanning
/// continues right after it. Closed runs are never re-scanned.
///
/// # Returns
/// Nodes whose spans tile `[base, base + s.len())` exactly. Adjacent plain
/// text is merged, so no two `PlainText` nodes are ever neighbours.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, s: &str, base: usize, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::plain(s, base, Span::new(start, end)));
        }
    }

    while !cur.eof() {
        let Some(delim) = opening_at(&cur) else {
            cur.bump();
            continue;
        };
        let start = cur.pos();
        match try_parse_delimited(&mut cur, delim) {
            Some(node) => {
                flush_text(&mut out, s, base, text_start, start);
                text_start = node.span.end;
                out.push(node);
            }
            // Unclosed: the opener stays in the pending plain text run
            None => cur.bump_n(delim.token.len()),
        }
    }

    flush_text(&mut out, s, base, text_start, cur.pos());
    out
}

/// The highest-precedence delimiter whose token starts at the cursor.
fn opening_at(cur: &Cursor<'_>) -> Option<Delimiter> {
    DELIMITERS.iter().copied().find(|d| cur.starts_with(d.token))
}

/// Attempts to parse a delimited run opened by `delim` at the cursor.
///
/// Returns `None` if no closing token follows. On failure the cursor is
/// left where it was.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: Delimiter) -> Option<InlineNode> {
    let start = cur.i;
    let inner_start = start + delim.token.len();

    let mut probe = cur.clone();
    probe.seek(inner_start);
    let inner_end = probe.find(delim.token)?;
    let end = inner_end + delim.token.len();

    cur.seek(end);
    Some(InlineNode {
        kind: delim.kind,
        text: cur.s[inner_start..inner_end].to_string(),
        span: Span::new(cur.base + start, cur.base + end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds_and_text(s: &str) -> Vec<(InlineKind, String)> {
        parse_inline(0, s)
            .into_iter()
            .map(|n| (n.kind, n.text))
            .collect()
    }

    fn runs(expected: &[(InlineKind, &str)]) -> Vec<(InlineKind, String)> {
        expected.iter().map(|(k, t)| (*k, t.to_string())).collect()
    }

    use crate::parsing::inline::InlineKind::*;

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, PlainText);
        assert_eq!(nodes[0].span, Span::new(0, 11));
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inline(0, "").is_empty());
    }

    #[rstest]
    #[case("**bold**", &[(Bold, "bold")])]
    #[case("*under*", &[(Underline, "under")])]
    #[case("__italic__", &[(Italic, "italic")])]
    #[case("~~gone~~", &[(Strikethrough, "gone")])]
    #[case("`code`", &[(InlineCode, "code")])]
    #[case("**bold** and normal", &[(Bold, "bold"), (PlainText, " and normal")])]
    #[case("~~gone~~ `code`", &[(Strikethrough, "gone"), (PlainText, " "), (InlineCode, "code")])]
    #[case("a *b* c", &[(PlainText, "a "), (Underline, "b"), (PlainText, " c")])]
    fn parses_each_style(#[case] input: &str, #[case] expected: &[(InlineKind, &str)]) {
        assert_eq!(kinds_and_text(input), runs(expected));
    }

    #[rstest]
    #[case("**unterminated")]
    #[case("~~")]
    #[case("`")]
    #[case("*")]
    #[case("__half")]
    #[case("_single_ underscores")]
    #[case("~single~ tildes")]
    fn unclosed_markers_degrade_to_one_plain_run(#[case] input: &str) {
        assert_eq!(kinds_and_text(input), runs(&[(PlainText, input)]));
    }

    #[test]
    fn unclosed_double_star_does_not_fall_back_to_single() {
        // `**` is opened first and never closes, so both stars are literal;
        // the trailing `*` then has nothing left to close it.
        assert_eq!(kinds_and_text("**a*"), runs(&[(PlainText, "**a*")]));
        assert_eq!(
            kinds_and_text("**a *b*"),
            runs(&[(PlainText, "**a "), (Underline, "b")])
        );
    }

    #[test]
    fn single_star_closes_at_nearest_star() {
        assert_eq!(
            kinds_and_text("*a **b**"),
            runs(&[(Underline, "a "), (Underline, "b"), (PlainText, "*")])
        );
    }

    #[test]
    fn empty_runs_are_allowed() {
        assert_eq!(kinds_and_text("****"), runs(&[(Bold, "")]));
        assert_eq!(kinds_and_text("``"), runs(&[(InlineCode, "")]));
    }

    #[test]
    fn styles_do_not_nest() {
        assert_eq!(
            kinds_and_text("**bold __and italic__**"),
            runs(&[(Bold, "bold __and italic__")])
        );
        assert_eq!(kinds_and_text("`**x**`"), runs(&[(InlineCode, "**x**")]));
    }

    #[test]
    fn earliest_opener_wins_over_overlapping_runs() {
        // The code span opens first and swallows the tildes
        assert_eq!(
            kinds_and_text("`a ~~b` c~~"),
            runs(&[(InlineCode, "a ~~b"), (PlainText, " c~~")])
        );
    }

    #[test]
    fn spans_are_absolute_and_include_delimiters() {
        let nodes = parse_inline(100, "x **y**");
        assert_eq!(nodes[0].span, Span::new(100, 102));
        assert_eq!(nodes[1].span, Span::new(102, 107));
        assert_eq!(nodes[1].text, "y");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            kinds_and_text("café *naïve* 日本"),
            runs(&[(PlainText, "café "), (Underline, "naïve"), (PlainText, " 日本")])
        );
    }

    #[test]
    fn adjacent_plain_text_is_merged() {
        let nodes = parse_inline(0, "a ** b ~~ c ` d");
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_plain());
    }
}
