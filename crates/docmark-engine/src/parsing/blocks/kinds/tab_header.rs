/// Tab header type (`=== "Title"`) with owned delimiter constants.
pub struct TabHeader;

impl TabHeader {
    pub const MARKER: &'static str = "===";
    pub const QUOTE: char = '"';

    /// Extracts the quoted title from a left-trimmed tab header line.
    ///
    /// The title must be non-empty; text after the closing quote is ignored.
    pub fn title(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::MARKER)?.trim_start();
        let quoted = rest.strip_prefix(Self::QUOTE)?;
        let end = quoted.find(Self::QUOTE)?;
        (end > 0).then(|| &quoted[..end])
    }

    /// Returns true if the left-trimmed line is a complete tab header.
    pub fn opens(trimmed: &str) -> bool {
        Self::title(trimmed).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_extracted() {
        assert_eq!(TabHeader::title("=== \"Python\""), Some("Python"));
        assert_eq!(TabHeader::title("===\"Tight\""), Some("Tight"));
        assert_eq!(TabHeader::title("===   \"Spaced out\" trailing"), Some("Spaced out"));
    }

    #[test]
    fn incomplete_headers_do_not_open() {
        assert!(!TabHeader::opens("==="));
        assert!(!TabHeader::opens("=== Python"));
        assert!(!TabHeader::opens("=== \"unterminated"));
        assert!(!TabHeader::opens("=== \"\""));
        assert!(!TabHeader::opens("== \"Two\""));
    }
}
