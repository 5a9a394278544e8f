/// Default number of columns a tab advances to when measuring indentation.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// A reference to a single physical line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based physical line number in the source document.
    pub number: usize,
    /// The line text without its line terminator.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line with leading whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim_start()
    }

    pub fn is_blank(&self) -> bool {
        is_blank(self.text)
    }
}

/// Returns an iterator over lines numbered from `first_line`.
///
/// Splitting follows [`str::lines`]: `\n` and `\r\n` terminate a line and a
/// trailing terminator does not start a new one.
pub fn numbered_lines(text: &str, first_line: usize) -> impl Iterator<Item = LineRef<'_>> + '_ {
    text.lines().enumerate().map(move |(i, text)| LineRef {
        number: first_line + i,
        text,
    })
}

/// Counts physical lines the same way [`numbered_lines`] splits them.
pub fn line_count(text: &str) -> usize {
    text.lines().count()
}

/// Returns true for empty or whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Leading indentation width in columns, expanding tabs to the next tab stop.
pub fn indent_width(line: &str, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    let mut width = 0usize;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += tab_size - (width % tab_size),
            _ => break,
        }
    }
    width
}

/// Removes one level of container indentation: four spaces or a single tab.
///
/// Returns `None` when the line is not indented by one level.
pub fn strip_indent_level(line: &str) -> Option<&str> {
    line.strip_prefix("    ").or_else(|| line.strip_prefix('\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_lines_start_at_offset() {
        let lines: Vec<_> = numbered_lines("a\nb", 7).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], LineRef { number: 7, text: "a" });
        assert_eq!(lines[1], LineRef { number: 8, text: "b" });
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(line_count("a\nb\n"), 2);
        assert_eq!(line_count("a\r\nb"), 2);
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("\n\n"), 2);
    }

    #[test]
    fn indent_width_expands_tabs_to_stops() {
        assert_eq!(indent_width("    x", 4), 4);
        assert_eq!(indent_width("\tx", 4), 4);
        assert_eq!(indent_width("  \tx", 4), 4);
        assert_eq!(indent_width("\t\tx", 2), 4);
        assert_eq!(indent_width("x", 4), 0);
    }

    #[test]
    fn zero_tab_size_is_treated_as_one() {
        assert_eq!(indent_width("\t\tx", 0), 2);
    }

    #[test]
    fn strip_indent_level_accepts_spaces_or_tab() {
        assert_eq!(strip_indent_level("    body"), Some("body"));
        assert_eq!(strip_indent_level("\tbody"), Some("body"));
        assert_eq!(strip_indent_level("        deep"), Some("    deep"));
        assert_eq!(strip_indent_level("  shallow"), None);
    }

    #[test]
    fn line_ref_trims_leading_whitespace_only() {
        let line = LineRef {
            number: 1,
            text: "   > quote  ",
        };
        assert_eq!(line.trimmed(), "> quote  ");
        assert!(!line.is_blank());
        assert!(LineRef { number: 2, text: " \t " }.is_blank());
    }
}
