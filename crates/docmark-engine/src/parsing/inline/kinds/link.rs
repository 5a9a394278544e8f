/// `[label](url)` link with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';

    /// Bytes that end a label scan without a match.
    pub fn ends_label(b: u8) -> bool {
        b == b']' || b == Self::OPEN
    }

    /// Bytes that end a url scan. Only [`Link::CLOSE`] completes the link.
    pub fn ends_url(b: u8) -> bool {
        b == Self::CLOSE || b == b'(' || b == Self::OPEN || b.is_ascii_whitespace()
    }
}
