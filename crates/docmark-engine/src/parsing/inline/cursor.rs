/// A byte cursor over a single line of inline text.
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

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes().get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes. The caller keeps the index on a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `stop` rejects the current byte.
    pub fn bump_until(&mut self, stop: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if stop(b) {
                break;
            }
            self.i += 1;
        }
    }

    /// The text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_a_link_by_hand() {
        let mut cur = Cursor::new("[a](b)");
        assert_eq!(cur.bump(), Some(b'['));
        cur.bump_until(|b| b == b']');
        assert_eq!(cur.slice_from(1), "a");
        assert!(cur.starts_with(b"]("));
        cur.bump_n(2);
        cur.bump_until(|b| b == b')');
        assert_eq!(cur.slice_from(4), "b");
        assert_eq!(cur.bump(), Some(b')'));
        assert!(cur.eof());
    }

    #[test]
    fn nothing_to_read_in_empty_text() {
        let mut cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_near_the_end() {
        let mut cur = Cursor::new("x]");
        assert!(!cur.starts_with(b"]("));
        cur.bump();
        assert!(cur.starts_with(b"]"));
        assert!(!cur.starts_with(b"]("));
        cur.bump_n(3);
        assert!(!cur.starts_with(b"]"));
    }

    #[test]
    fn bump_until_on_multibyte_text_stops_at_ascii_byte() {
        let mut cur = Cursor::new("é✓[");
        cur.bump_until(|b| b == b'[');
        assert_eq!(cur.slice_from(0), "é✓");
        assert_eq!(cur.peek(), Some(b'['));
    }
}
