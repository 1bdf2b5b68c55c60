//! # Block Parsing
//!
//! Just enough block structure to feed the inline pipeline: paragraphs
//! separated by blank lines. Headings, lists, quotes and fences belong to
//! the block-structure pass that wraps this crate.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (blank or not, content span).
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups lines and
//!    emits a `BlockNode` whenever a paragraph closes.

pub mod builder;
pub mod classify;

pub use builder::{BlockBuilder, BlockNode};
pub use classify::{LineClass, MarkdownLineClassifier};
