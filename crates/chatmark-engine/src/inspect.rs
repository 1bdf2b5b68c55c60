//! # Inspect
//!
//! Generic pre-order traversal over the node tree.
//!
//! The visitor decides descent: returning `true` walks into the node's
//! children before moving on to its siblings, returning `false` skips them.
//! Siblings are visited either way, in source order.

use crate::{
    options::InlineOptions,
    parsing::{node::Node, parse_document},
};

/// Walks `node` and its descendants in pre-order, depth first.
///
/// ```
/// use chatmark_engine::{InlineOptions, Node, inspect, parse_inline};
///
/// let nodes = parse_inline(0, "a `b` c", &InlineOptions::default());
/// let mut kinds = vec![];
/// for n in &nodes {
///     inspect(n, |n| {
///         kinds.push(n.kind_name());
///         true
///     });
/// }
/// assert_eq!(
///     kinds,
///     ["Text", "CodeSpan", "CodeSpanMarker", "CodeSpanMarker", "Text"]
/// );
/// ```
pub fn inspect<F>(node: &Node, mut visit: F)
where
    F: FnMut(&Node) -> bool,
{
    walk(node, &mut visit);
}

fn walk<F>(node: &Node, visit: &mut F)
where
    F: FnMut(&Node) -> bool,
{
    if visit(node) {
        for child in node.children() {
            walk(child, visit);
        }
    }
}

/// Parses `markdown` with default options and walks the resulting document,
/// starting at the `Document` container.
pub fn inspect_markdown<F>(markdown: &str, visit: F)
where
    F: FnMut(&Node) -> bool,
{
    let doc = parse_document(markdown, &InlineOptions::default());
    doc.inspect(visit);
}
