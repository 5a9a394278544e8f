use serde::Serialize;

use crate::parsing::span::LineSpan;

/// An inline run inside heading or paragraph text.
///
/// Both variants carry the span of the line that owns the text, so runs
/// split from the same line share a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Inline {
    Text { text: String, span: LineSpan },
    Link { text: String, url: String, span: LineSpan },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text, .. } | Inline::Link { text, .. } => text,
        }
    }

    pub fn span(&self) -> LineSpan {
        match self {
            Inline::Text { span, .. } | Inline::Link { span, .. } => *span,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Inline::Link { url, .. } => Some(url),
            Inline::Text { .. } => None,
        }
    }
}
