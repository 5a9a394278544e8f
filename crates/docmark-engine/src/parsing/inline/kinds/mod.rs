//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Link`**: `OPEN = b'['`, `LABEL_CLOSE = b"]("`, `CLOSE = b')'`
//!
//! The splitter reads these constants; it never hardcodes `[` or `](`.

pub mod link;

pub use link::Link;
