/// A cursor for byte-wise scanning of block text with position tracking.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Byte offset of the next `pat` at or after the cursor, if any.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.s[self.i..].find(pat).map(|off| self.i + off)
    }

    /// Advances past the current character, keeping the index on a char boundary.
    pub fn bump(&mut self) {
        if let Some(c) = self.s[self.i..].chars().next() {
            self.i += c.len_utf8();
        }
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves to an absolute byte position.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos;
    }
}
