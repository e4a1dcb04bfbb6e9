//! Whole-input properties of `format`, checked over every short string
//! built from the characters that carry meaning in the syntax.

use post_markup_engine::{
    BlockKind, InlineKind, format,
    parsing::{inline::kinds::token_for, snapshot},
};

const ALPHABET: [char; 10] = ['*', '_', '~', '`', '#', '>', ' ', '\r', '\n', 'a'];

/// All strings over `ALPHABET` up to `max_len` characters.
fn all_inputs(max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
        for s in &frontier {
            for c in ALPHABET {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Rebuilds the source from block prefixes, delimiters and run text.
fn reconstruct(raw: &str) -> String {
    let blocks = format(raw);
    let mut out = String::new();
    for (i, b) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Prefix (or the whitespace of a line break) comes straight from the line
        out.push_str(&raw[b.span.start..b.content_span.start]);
        for n in &b.inline {
            let token = token_for(n.kind).unwrap_or("");
            out.push_str(token);
            out.push_str(&n.text);
            out.push_str(token);
        }
    }
    out
}

#[test]
fn every_short_input_holds_invariants() {
    for raw in all_inputs(5) {
        let blocks = format(&raw);
        snapshot::invariants(&raw, &blocks);
    }
}

#[test]
fn no_characters_are_dropped() {
    for raw in all_inputs(5) {
        assert_eq!(reconstruct(&raw), raw, "lost characters in {raw:?}");
    }
}

#[test]
fn formatting_is_idempotent() {
    for raw in all_inputs(4) {
        assert_eq!(format(&raw), format(&raw), "unstable output for {raw:?}");
    }
}

#[test]
fn block_count_matches_line_count() {
    for raw in all_inputs(5).into_iter().filter(|s| !s.is_empty()) {
        assert_eq!(format(&raw).len(), raw.split('\n').count(), "{raw:?}");
    }
}

#[test]
fn plain_text_never_neighbours_plain_text() {
    for raw in all_inputs(5) {
        for b in format(&raw) {
            for pair in b.inline.windows(2) {
                assert!(
                    !(pair[0].kind == InlineKind::PlainText && pair[1].kind == InlineKind::PlainText),
                    "unmerged plain runs in {raw:?}"
                );
            }
        }
    }
}

#[test]
fn line_breaks_only_for_blank_lines() {
    for raw in all_inputs(4) {
        for b in format(&raw) {
            let blank = b.span.slice(&raw).trim().is_empty();
            assert_eq!(b.kind == BlockKind::LineBreak, blank, "{raw:?}");
        }
    }
}

#[test]
fn long_line_completes() {
    let raw = format!("*{}", "a ~~ b __ c ` ".repeat(20_000));
    let blocks = format(&raw);
    assert_eq!(blocks.len(), 1);
    snapshot::invariants(&raw, &blocks);
}
