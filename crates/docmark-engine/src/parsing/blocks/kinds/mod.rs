//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. Every prefix or
//! pattern that decides what a line is lives here; the classifier, the
//! dispatch table and the lexer all call these instead of hardcoding
//! `#`, `>` or `===`.
//!
//! Matchers named `opens` take the left-trimmed line.

pub mod admonition;
pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_tag;
pub mod list_marker;
pub mod tab_header;

pub use admonition::{AdmonitionHeader, AdmonitionTag, ParsedHeader};
pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceInfo};
pub use heading::AtxHeading;
pub use html_tag::HtmlTag;
pub use list_marker::{ListMarker, ListStyle};
pub use tab_header::TabHeader;
