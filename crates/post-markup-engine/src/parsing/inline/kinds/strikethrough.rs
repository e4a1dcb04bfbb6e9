/// Strikethrough inline type with owned delimiter constant.
pub struct Strikethrough;

impl Strikethrough {
    /// Two tildes open and close a strikethrough run.
    pub const TOKEN: &'static [u8] = b"~~";
}
