/// A byte cursor over a block's content, tracking absolute positions.
///
/// Delimiters are all ASCII, so byte-wise scanning never matches inside a
/// multi-byte character: UTF-8 continuation bytes are always `>= 0x80`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The content being scanned.
    pub s: &'a str,
    /// Offset of `s` in the raw input.
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Local index of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        if pat.is_empty() || rest.len() < pat.len() {
            return None;
        }
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Advances by one byte.
    pub fn bump(&mut self) {
        if !self.eof() {
            self.i += 1;
        }
    }

    /// Advances by `n` bytes, clamped to the end of input.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Moves to local index `i`, clamped to the end of input.
    pub fn seek(&mut self, i: usize) {
        self.i = i.min(self.s.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 10);
        assert_eq!(cur.pos(), 10);
        assert!(!cur.eof());
        cur.bump();
        assert_eq!(cur.pos(), 11);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with(b"**"));
        assert!(cur.starts_with(b"*"));
        assert!(!cur.starts_with(b"~~"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 0);
        assert!(!cur.starts_with(b"*"));
        assert_eq!(cur.find(b"*"), None);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("a*", 0);
        cur.bump();
        assert!(cur.starts_with(b"*"));
        assert!(!cur.starts_with(b"**"));
    }

    #[test]
    fn find_is_relative_to_cursor() {
        let mut cur = Cursor::new("~~a~~b~~", 0);
        assert_eq!(cur.find(b"~~"), Some(0));
        cur.bump_n(2);
        assert_eq!(cur.find(b"~~"), Some(3));
        cur.seek(5);
        assert_eq!(cur.find(b"~~"), Some(6));
        cur.seek(7);
        assert_eq!(cur.find(b"~~"), None);
    }

    #[test]
    fn find_skips_multibyte_characters() {
        let cur = Cursor::new("é*ü*", 0);
        assert_eq!(cur.find(b"*"), Some(2));
    }

    #[test]
    fn bump_n_past_end_clamps() {
        let mut cur = Cursor::new("hi", 0);
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.pos(), 2);
        cur.bump();
        assert_eq!(cur.pos(), 2);
    }
}
