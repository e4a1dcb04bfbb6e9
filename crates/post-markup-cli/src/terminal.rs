use post_markup_engine::{BlockKind, BlockNode, InlineKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const QUOTE_BAR: &str = "│ ";

/// Converts formatted blocks into styled terminal lines, one per block.
pub fn to_lines(blocks: &[BlockNode]) -> Vec<Line<'static>> {
    blocks.iter().map(block_line).collect()
}

fn block_line(b: &BlockNode) -> Line<'static> {
    let base = block_style(b.kind);
    let mut spans = Vec::with_capacity(b.inline.len() + 1);
    if b.kind == BlockKind::Blockquote {
        spans.push(Span::styled(QUOTE_BAR, Style::new().fg(Color::DarkGray)));
    }
    spans.extend(
        b.inline
            .iter()
            .map(|n| Span::styled(n.text.clone(), base.patch(inline_style(n.kind)))),
    );
    Line::from(spans)
}

fn block_style(kind: BlockKind) -> Style {
    let base = if kind.is_heading() {
        Style::new().add_modifier(Modifier::BOLD)
    } else {
        Style::new()
    };
    match kind {
        BlockKind::Heading1 => base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        BlockKind::Heading2 => base.fg(Color::Cyan),
        BlockKind::Heading3 => base.fg(Color::Blue),
        BlockKind::Blockquote => base.fg(Color::Gray),
        BlockKind::Paragraph | BlockKind::LineBreak => base,
    }
}

fn inline_style(kind: InlineKind) -> Style {
    match kind {
        InlineKind::PlainText => Style::new(),
        InlineKind::Bold => Style::new().add_modifier(Modifier::BOLD),
        InlineKind::Underline => Style::new().add_modifier(Modifier::UNDERLINED),
        InlineKind::Italic => Style::new().add_modifier(Modifier::ITALIC),
        InlineKind::Strikethrough => Style::new().add_modifier(Modifier::CROSSED_OUT),
        InlineKind::InlineCode => Style::new().fg(Color::Yellow).bg(Color::DarkGray),
    }
}
