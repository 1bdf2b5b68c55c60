//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Escape`**: `BACKSLASH`, and which bytes may follow it
//! - **`CodeSpan`**: `TICK`, closer search and content normalization
//! - **`CharRef`**: `AMP`, `HASH`, `SEMI`, named and numeric decoding
//! - **`Bracket`**: `OPEN`, `CLOSE`, `BANG`
//! - **`LineBreak`**: `LF`, `CR`, and the hard-break space count
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.
//! The scanner calls these constants; it never hardcodes `[` or `` ` ``.

pub mod bracket;
pub mod char_ref;
pub mod code_span;
pub mod escape;
pub mod line_break;

pub use bracket::Bracket;
pub use char_ref::CharRef;
pub use code_span::CodeSpan;
pub use escape::Escape;
pub use line_break::LineBreak;
