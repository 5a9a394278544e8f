//! # Line Lexer
//!
//! Turns text into one token per physical line plus a trailing
//! [`TokenKind::Eof`]. Lines are classified by [`MarkdownLineClassifier`],
//! the same matchers the block parser dispatches on, so the two never
//! disagree about what a line opens.
//!
//! The only state carried between lines is whether a code fence is open:
//! inside a fence every line is raw text until the closing fence. A fence
//! that never closes is left for the parser to resolve.

use std::{collections::VecDeque, iter::FusedIterator, str::Lines};

use serde::Serialize;

use super::{
    blocks::{BlockOpen, LineClass, MarkdownLineClassifier, kinds::CodeFence},
    lines::{DEFAULT_TAB_SIZE, LineRef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Heading,
    FenceStart,
    FenceEnd,
    UlMarker,
    OlMarker,
    BlockQuote,
    TabHeader,
    Admonition,
    HtmlTag,
    Blank,
    Text,
    Eof,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Heading => "HEADING",
            TokenKind::FenceStart => "FENCE_START",
            TokenKind::FenceEnd => "FENCE_END",
            TokenKind::UlMarker => "UL_MARKER",
            TokenKind::OlMarker => "OL_MARKER",
            TokenKind::BlockQuote => "BLOCKQUOTE",
            TokenKind::TabHeader => "TAB_HEADER",
            TokenKind::Admonition => "ADMONITION",
            TokenKind::HtmlTag => "HTML_TAG",
            TokenKind::Blank => "BLANK",
            TokenKind::Text => "TEXT",
            TokenKind::Eof => "EOF",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified line, or one element of an HTML line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Left-trimmed line text; the element text for [`TokenKind::HtmlTag`];
    /// empty for [`TokenKind::Blank`] and [`TokenKind::Eof`].
    pub value: &'a str,
    /// Indent width in columns, tabs expanded.
    pub indent: usize,
    /// 1-based line number. `Eof` sits one past the last line.
    pub line: usize,
}

/// Lazy token stream over a text. Clone it to restart from the same point.
#[derive(Clone)]
pub struct Lexer<'a> {
    lines: Lines<'a>,
    line: usize,
    classifier: MarkdownLineClassifier,
    pending: VecDeque<Token<'a>>,
    in_fence: bool,
    finished: bool,
}

/// Lexes `text` with the default tab size.
pub fn lex(text: &str) -> Lexer<'_> {
    Lexer::new(text)
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_tab_size(text, DEFAULT_TAB_SIZE)
    }

    /// Tab size only affects the reported `indent`, never the kind.
    pub fn with_tab_size(text: &'a str, tab_size: usize) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
            classifier: MarkdownLineClassifier::new(tab_size),
            pending: VecDeque::new(),
            in_fence: false,
            finished: false,
        }
    }

    fn lex_line(&mut self, class: LineClass<'a>) {
        let token = |kind: TokenKind, value: &'a str| Token {
            kind,
            value,
            indent: class.indent,
            line: class.number,
        };

        if class.is_blank {
            self.pending.push_back(token(TokenKind::Blank, ""));
            return;
        }

        if self.in_fence {
            let kind = if CodeFence::closes(class.trimmed) {
                self.in_fence = false;
                TokenKind::FenceEnd
            } else {
                TokenKind::Text
            };
            self.pending.push_back(token(kind, class.trimmed));
            return;
        }

        let kind = match class.open {
            Some(BlockOpen::CodeFence) => {
                self.in_fence = true;
                TokenKind::FenceStart
            }
            Some(BlockOpen::Heading) => TokenKind::Heading,
            Some(BlockOpen::UnorderedList) => TokenKind::UlMarker,
            Some(BlockOpen::OrderedList) => TokenKind::OlMarker,
            Some(BlockOpen::BlockQuote) => TokenKind::BlockQuote,
            Some(BlockOpen::Admonition(_)) => TokenKind::Admonition,
            Some(BlockOpen::TabBlock) => TokenKind::TabHeader,
            None => match &class.html {
                Some(elements) => {
                    for &element in elements {
                        self.pending.push_back(token(TokenKind::HtmlTag, element));
                    }
                    return;
                }
                None => TokenKind::Text,
            },
        };
        self.pending.push_back(token(kind, class.trimmed));
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.finished {
            return None;
        }

        match self.lines.next() {
            Some(text) => {
                self.line += 1;
                let class = self.classifier.classify(LineRef {
                    number: self.line,
                    text,
                });
                self.lex_line(class);
                self.pending.pop_front()
            }
            None => {
                self.finished = true;
                if self.in_fence {
                    log::debug!("input ends inside a code fence");
                }
                Some(Token {
                    kind: TokenKind::Eof,
                    value: "",
                    indent: 0,
                    line: self.line + 1,
                })
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}
