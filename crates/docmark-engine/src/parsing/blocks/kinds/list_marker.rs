/// List marker type with owned delimiter constants.
///
/// Both marker styles require at least one whitespace character after the
/// marker; `-item` and `1.item` are plain text.
pub struct ListMarker;

/// Which of the two list styles a marker belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `-`, `+` or `*`.
    Unordered,
    /// Digits followed by `.` or `)`.
    Ordered,
}

impl ListMarker {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];
    pub const ORDERED_DELIMITERS: [u8; 2] = [b'.', b')'];

    /// Byte length of the marker plus its trailing whitespace run.
    fn with_gap(s: &str, marker_len: usize) -> Option<usize> {
        let rest = &s[marker_len..];
        let gap = rest.len() - rest.trim_start().len();
        (gap > 0).then_some(marker_len + gap)
    }

    /// Length of an unordered marker at the start of `trimmed`.
    pub fn unordered(trimmed: &str) -> Option<usize> {
        match trimmed.as_bytes().first() {
            Some(b) if Self::BULLETS.contains(b) => Self::with_gap(trimmed, 1),
            _ => None,
        }
    }

    /// Length of an ordered marker at the start of `trimmed`.
    pub fn ordered(trimmed: &str) -> Option<usize> {
        let b = trimmed.as_bytes();
        let digits = b.iter().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        match b.get(digits) {
            Some(d) if Self::ORDERED_DELIMITERS.contains(d) => Self::with_gap(trimmed, digits + 1),
            _ => None,
        }
    }

    /// Length of a marker of the given style.
    pub fn len_for(style: ListStyle, trimmed: &str) -> Option<usize> {
        match style {
            ListStyle::Unordered => Self::unordered(trimmed),
            ListStyle::Ordered => Self::ordered(trimmed),
        }
    }

    /// Item text after the marker, with trailing whitespace removed.
    pub fn item_text(style: ListStyle, line: &str) -> Option<&str> {
        let trimmed = line.trim_start();
        let len = Self::len_for(style, trimmed)?;
        Some(trimmed[len..].trim_end())
    }
}
