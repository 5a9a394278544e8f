pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    FoldPolicy, Lexer, LineSpan, ParseOptions, Token, TokenKind,
    blocks::{
        Admonition, Block, CodeBlock, Document, Heading, List, ListItem, Paragraph, QuoteBlock,
        Tab, TabBlock, kinds::AdmonitionTag,
    },
    inline::Inline,
    lex, parse, parse_with,
};
