/// Code span inline type with owned delimiter constant.
///
/// Like every other run, a code span is shown verbatim: `` `**x**` `` is
/// code containing the asterisks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TOKEN: &'static [u8] = b"`";
}
