use crate::{options::InlineOptions, parsing::node::Node};

use super::{builder::TreeBuilder, scanner::Scanner};

/// Parses inline content into a sequence of [`Node`]s.
///
/// # Arguments
/// - `base`: Byte offset in the buffer where `s` begins (for absolute spans)
/// - `s`: The content to parse (typically a paragraph's content span)
/// - `options`: Inline parsing options
///
/// # Raw Zone Precedence
/// Code spans are resolved when their opening fence is reached and nothing
/// inside them is scanned: `` `[not a link]` `` yields no bracket markers.
///
/// # Returns
/// Nodes covering the entire input in source order. Text between special
/// constructs is emitted as [`Node::Text`].
pub fn parse_inline(base: usize, s: &str, options: &InlineOptions) -> Vec<Node> {
    let tokens = Scanner::new(s, base, options).scan();
    let mut builder = TreeBuilder::new(s, base);
    builder.extend(tokens);
    builder.finish()
}
