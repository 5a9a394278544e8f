pub mod blocks;
pub mod inline;
pub mod lexer;
pub mod lines;
pub mod options;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{BlockParser, Document};

pub use lexer::{Lexer, Token, TokenKind, lex};
pub use options::{DEFAULT_MAX_DEPTH, FoldPolicy, ParseOptions};
pub use span::LineSpan;

/// Parses `text` with default options.
pub fn parse(text: &str) -> Document {
    parse_with(text, &ParseOptions::default())
}

/// Parses `text` into a [`Document`] spanning every physical line.
///
/// Parsing never fails: malformed constructs degrade to the nearest
/// well-formed block and unterminated fences run to the end of input.
pub fn parse_with(text: &str, options: &ParseOptions) -> Document {
    let doc = BlockParser::new(text, *options).parse();
    log::debug!(
        "parsed {} lines into {} top-level blocks",
        doc.total_lines(),
        doc.blocks.len()
    );
    doc
}
