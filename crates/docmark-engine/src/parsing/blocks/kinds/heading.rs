/// ATX heading type with owned delimiter constants.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `s` is 1-6 `#` followed by whitespace.
    fn level_of(s: &str) -> Option<usize> {
        let b = s.as_bytes();
        let level = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        match s[level..].chars().next() {
            Some(c) if c.is_whitespace() => Some(level),
            _ => None,
        }
    }

    /// Returns true if the left-trimmed line opens a heading.
    pub fn opens(trimmed: &str) -> bool {
        Self::level_of(trimmed).is_some()
    }

    /// Splits a heading line into `(level, text)`.
    ///
    /// The line is trimmed on both sides first, so `"#   "` opens a heading
    /// but does not split; the caller decides how to recover.
    pub fn split(line: &str) -> Option<(u8, &str)> {
        let line = line.trim();
        let level = Self::level_of(line)?;
        Some((u8::try_from(level).ok()?, line[level..].trim_start()))
    }
}
