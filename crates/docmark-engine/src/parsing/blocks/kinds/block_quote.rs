/// Blockquote block type with owned delimiter constant.
///
/// Only one level of `>` is recognised; a nested `> >` keeps its inner
/// marker as part of the quoted line.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns true if the left-trimmed line belongs to a quote.
    pub fn opens(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Strips leading whitespace, one `>` and the whitespace after it.
    ///
    /// Returns `None` if the line is not a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.trim_start()
            .strip_prefix(Self::PREFIX)
            .map(str::trim_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn strip_without_space() {
        assert_eq!(BlockQuote::strip_prefix(">hello"), Some("hello"));
    }

    #[test]
    fn strip_indented_quote() {
        assert_eq!(BlockQuote::strip_prefix("   >   hello"), Some("hello"));
    }

    #[test]
    fn nested_marker_is_kept() {
        assert_eq!(BlockQuote::strip_prefix("> > inner"), Some("> inner"));
    }

    #[test]
    fn bare_marker_gives_empty_line() {
        assert_eq!(BlockQuote::strip_prefix(">"), Some(""));
    }
}
