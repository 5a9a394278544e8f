//! # Inline Splitting
//!
//! Splits heading and paragraph text into literal runs and `[label](url)`
//! links. The scan is a single left-to-right pass over a byte [`Cursor`]:
//! a failed link attempt resumes from where it stopped, never from the
//! opening bracket.
//!
//! ## Modules
//!
//! - **`types`**: `Inline` enum (Text, Link)
//! - **`kinds`**: inline types with owned delimiters (Link)
//! - **`cursor`**: `Cursor` for byte-level scanning
//! - **`parser`**: `split_inlines()` entry point
//!
//! Links do not nest. Emphasis and other inline formatting stay literal text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use cursor::Cursor;
pub use parser::split_inlines;
pub use types::Inline;
