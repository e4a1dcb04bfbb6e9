/// `**bold**`
pub struct Bold;

impl Bold {
    pub const TOKEN: &'static [u8] = b"**";
}

/// `*underline*`. Single asterisks mean underline here, not italic.
pub struct Underline;

impl Underline {
    pub const TOKEN: &'static [u8] = b"*";
}

/// `__italic__`. A single underscore is never a delimiter.
pub struct Italic;

impl Italic {
    pub const TOKEN: &'static [u8] = b"__";
}
