//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: renders a `Document` as an indented text tree for `insta`
//!   snapshots, one node per line with its line span
//! - **`invariants`**: runtime checks for span correctness (root coverage,
//!   containment, sibling ordering)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by fixture snapshots rather than a formal
//! grammar. Every fixture is also run through the invariant checks, so a
//! snapshot can only be accepted if its spans are well formed.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
