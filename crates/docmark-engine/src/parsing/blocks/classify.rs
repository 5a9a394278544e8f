use crate::parsing::lines::{LineRef, indent_width};

use super::{
    kinds::HtmlTag,
    open::{BlockOpen, try_open},
};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context. Fence pairing is left to whoever consumes the classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// 1-based physical line number.
    pub number: usize,
    /// Indent width in columns, tabs expanded.
    pub indent: usize,
    /// Line text with leading indentation removed.
    pub trimmed: &'a str,
    /// Whether the line is empty or whitespace only.
    pub is_blank: bool,
    /// The block this line would open under parser dispatch.
    pub open: Option<BlockOpen>,
    /// The HTML elements making up the line, when it is nothing else.
    pub html: Option<Vec<&'a str>>,
}

/// Classifies individual lines using the same matchers as block dispatch.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownLineClassifier {
    pub tab_size: usize,
}

impl MarkdownLineClassifier {
    pub fn new(tab_size: usize) -> Self {
        Self { tab_size }
    }

    pub fn classify<'a>(&self, line: LineRef<'a>) -> LineClass<'a> {
        let trimmed = line.trimmed();
        let is_blank = trimmed.trim_end().is_empty();
        let open = if is_blank { None } else { try_open(trimmed) };
        let html = match open {
            None if !is_blank => HtmlTag::elements(trimmed),
            _ => None,
        };

        LineClass {
            number: line.number,
            indent: indent_width(line.text, self.tab_size),
            trimmed,
            is_blank,
            open,
            html,
        }
    }
}
