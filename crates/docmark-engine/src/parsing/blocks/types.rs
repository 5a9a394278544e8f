use serde::Serialize;

use crate::parsing::{inline::Inline, span::LineSpan};

use super::kinds::AdmonitionTag;

/// Root of a parsed file. Always spans `[1, total_lines + 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub span: LineSpan,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Number of physical lines in the parsed source.
    pub fn total_lines(&self) -> usize {
        self.span.limit_line - 1
    }
}

/// A structural unit occupying one or more whole lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    UnorderedList(List),
    OrderedList(List),
    QuoteBlock(QuoteBlock),
    TabBlock(TabBlock),
    Admonition(Admonition),
}

impl Block {
    pub fn span(&self) -> LineSpan {
        match self {
            Block::Heading(b) => b.span,
            Block::Paragraph(b) => b.span,
            Block::CodeBlock(b) => b.span,
            Block::UnorderedList(b) | Block::OrderedList(b) => b.span,
            Block::QuoteBlock(b) => b.span,
            Block::TabBlock(b) => b.span,
            Block::Admonition(b) => b.span,
        }
    }

    /// Nested blocks of an admonition. Tabs hold their blocks per tab and
    /// list items hold a paragraph, so both return an empty slice here.
    pub fn children(&self) -> &[Block] {
        match self {
            Block::Admonition(a) => &a.blocks,
            _ => &[],
        }
    }

    /// Inline runs of headings and paragraphs.
    pub fn inlines(&self) -> &[Inline] {
        match self {
            Block::Heading(h) => &h.inlines,
            Block::Paragraph(p) => &p.inlines,
            _ => &[],
        }
    }
}

/// `#` to `######` heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub span: LineSpan,
    /// 1 to 6.
    pub level: u8,
    pub inlines: Vec<Inline>,
}

impl Heading {
    pub fn text(&self) -> String {
        plain_text(&self.inlines)
    }
}

/// A run of plain text lines joined with single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub span: LineSpan,
    pub inlines: Vec<Inline>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        plain_text(&self.inlines)
    }
}

/// Fenced code. `content` holds the raw lines between the fences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub span: LineSpan,
    pub language: Option<String>,
    pub meta: String,
    pub content: String,
}

/// Ordered or unordered list; the style is carried by the [`Block`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub span: LineSpan,
    pub items: Vec<ListItem>,
}

/// One list entry. Items are flat: exactly one single-line paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub span: LineSpan,
    pub paragraph: Paragraph,
}

/// `>` lines with the marker and following whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteBlock {
    pub span: LineSpan,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBlock {
    pub span: LineSpan,
    pub tabs: Vec<Tab>,
}

/// One `=== "Title"` pane and its nested sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub span: LineSpan,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// `!!!` / `???` callout and its nested sub-document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admonition {
    pub span: LineSpan,
    pub tag: AdmonitionTag,
    /// Lower-cased kind such as `note` or `warning`; empty when absent.
    pub kind: String,
    pub title: String,
    /// Decided by [`FoldPolicy`](crate::parsing::FoldPolicy).
    pub foldable: bool,
    pub blocks: Vec<Block>,
}

/// Concatenates inline runs, links contributing their label.
fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}
