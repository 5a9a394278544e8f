use serde::Serialize;

/// A half-open physical line range `[start_line, limit_line)`, 1-indexed.
///
/// Every parsed node stores one of these. Downstream tooling reports problems
/// against it directly, so spans are computed exactly once, during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineSpan {
    /// First line covered by the node.
    pub start_line: usize,
    /// One past the last line covered by the node.
    pub limit_line: usize,
}

impl LineSpan {
    pub fn new(start_line: usize, limit_line: usize) -> Self {
        Self {
            start_line,
            limit_line,
        }
    }

    /// Span covering exactly one line.
    pub fn line(line: usize) -> Self {
        Self::new(line, line + 1)
    }

    /// Number of lines covered. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.limit_line.saturating_sub(self.start_line)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: LineSpan) -> bool {
        self.start_line <= other.start_line && other.limit_line <= self.limit_line
    }

    /// Returns true if the two spans share at least one line.
    #[must_use]
    pub fn overlaps(self, other: LineSpan) -> bool {
        self.start_line < other.limit_line && other.start_line < self.limit_line
    }
}

impl std::fmt::Display for LineSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_line, self.limit_line)
    }
}
