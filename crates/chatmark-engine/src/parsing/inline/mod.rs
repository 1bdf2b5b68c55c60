//! # Inline Parsing
//!
//! Cursor-based inline scanning with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and operates over the full
//! content span of a paragraph. It runs in two steps:
//!
//! 1. **`Scanner`** walks the bytes once, left to right, and emits a flat
//!    [`Token`] stream: literal runs, resolved nodes, degraded triggers and
//!    code spans.
//! 2. **`TreeBuilder`** coalesces adjacent literal runs into `Text` nodes and
//!    wraps code spans into containers.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`entities`**: Static table of named character references
//! - **`token`**: The scanner's output
//! - **`scanner`** / **`builder`**: The two steps above
//! - **`parser`**: `parse_inline()` main entry point
//!
//! ## Degrading
//!
//! Nothing here fails. A trigger byte that does not resolve (an unmatched
//! backtick run, a lone `&`, a backslash before a letter) becomes a `Text`
//! node of its own, covering exactly the trigger's bytes.

pub mod builder;
pub mod cursor;
pub mod entities;
pub mod kinds;
pub mod parser;
pub mod scanner;
pub mod token;

pub use builder::TreeBuilder;
pub use parser::parse_inline;
pub use scanner::Scanner;
pub use token::Token;
