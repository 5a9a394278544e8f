//! # Block Parsing
//!
//! Line-cursor recursive descent over numbered lines.
//!
//! ## Parsing Phases
//!
//! 1. **Dispatch** (`open`): the left-trimmed current line is matched against
//!    `OPEN_RULES` in precedence order; the first hit decides the block kind
//!    and anything else starts a paragraph.
//!
//! 2. **Block Construction** (`builder`): `BlockParser` consumes the lines of
//!    that block. Admonitions and tabs collect their indented body and hand
//!    it to a fresh `BlockParser`.
//!
//! ## Modules
//!
//! - **`types`**: the syntax tree (`Document`, `Block` and the per-kind nodes)
//! - **`kinds`**: block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`open`**: `try_open` and `match_rule` dispatch over `OPEN_RULES`
//! - **`builder`**: `BlockParser`
//!
//! ## Key Invariants
//!
//! - Every dispatched block consumes at least one line
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Spans are 1-based half-open line ranges into the original input,
//!   including for nested content

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockParser;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, OPEN_RULES, OpenRule, match_rule, try_open};
pub use types::{
    Admonition, Block, CodeBlock, Document, Heading, List, ListItem, Paragraph, QuoteBlock, Tab,
    TabBlock,
};
