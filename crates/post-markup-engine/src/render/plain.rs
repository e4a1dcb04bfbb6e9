use crate::parsing::blocks::BlockNode;

/// Display text of every block, one line per block, markers removed.
pub fn to_plain_text(blocks: &[BlockNode]) -> String {
    blocks
        .iter()
        .map(BlockNode::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single-line summary for post cards and search results.
///
/// Whitespace runs (line breaks included) collapse to one space. The result
/// is cut to at most `max_chars` characters plus a `...` suffix when
/// anything was dropped.
pub fn preview(blocks: &[BlockNode], max_chars: usize) -> String {
    let text = to_plain_text(blocks);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", collapsed[..idx].trim_end()),
        None => collapsed,
    }
}
