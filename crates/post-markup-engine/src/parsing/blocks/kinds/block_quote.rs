/// Blockquote block type with owned prefix constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix. The space is required.
    pub const PREFIX: &'static str = "> ";

    /// Returns the byte length of the quote prefix if `line` is a quote.
    ///
    /// Only a single prefix is recognised; `"> > a"` is a quote whose
    /// content is `"> a"`.
    pub fn strip_prefix(line: &str) -> Option<usize> {
        line.starts_with(Self::PREFIX).then_some(Self::PREFIX.len())
    }
}
