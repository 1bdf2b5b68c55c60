//! # chatmark-engine
//!
//! Inline tokenizer and first-pass syntax tree for chat-style markdown.
//!
//! ```text
//! bytes → paragraphs → Scanner → tokens → TreeBuilder → Node tree → inspect()
//! ```
//!
//! ```
//! use chatmark_engine::inspect_markdown;
//!
//! let mut texts = vec![];
//! inspect_markdown("\\*hello\\*", |node| {
//!     if let Some(text) = node.text() {
//!         texts.push((node.span().start, text.into_owned()));
//!     }
//!     true
//! });
//! assert_eq!(texts, vec![(1, "*".to_string()), (2, "hello".into()), (8, "*".into())]);
//! ```

pub mod error;
pub mod inspect;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ParseError;
pub use inspect::{inspect, inspect_markdown};
pub use options::{CharRefSpans, InlineOptions};
pub use parsing::{
    Document, parse_bytes, parse_document, parse_inline,
    node::{BracketKind, ContainerKind, MarkerPosition, Node},
    span::Span,
};
