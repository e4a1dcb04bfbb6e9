use super::span::Span;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line, excluding the `\n` terminator. A `\r` before the
    /// `\n` is line content.
    pub span: Span,
    /// The line text, borrowed from the input.
    pub text: &'a str,
}

/// Returns an iterator over the `\n`-separated lines of `raw` with their spans.
///
/// A trailing `\n` produces a trailing empty line, so the number of lines is
/// always one more than the number of `\n` characters.
pub fn lines_with_spans(raw: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    raw.split('\n').map(move |line| {
        let start = offset;
        offset += line.len() + 1;
        LineRef {
            span: Span::new(start, start + line.len()),
            text: line,
        }
    })
}
