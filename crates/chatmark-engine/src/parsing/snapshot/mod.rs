//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a tree as stable, indented text, one node per
//!   line, for `insta` snapshots and the CLI's `outline` format
//! - **`invariants`**: Runtime checks for parser correctness (spans in
//!   bounds, children inside parents, leaves partitioning each paragraph)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
