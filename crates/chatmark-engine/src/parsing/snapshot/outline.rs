use std::fmt::Write;

use crate::parsing::node::{ContainerKind, MarkerPosition, Node};

/// Renders `node` and its descendants as indented text.
///
/// ```text
/// Paragraph 0..12
///   Text 0..6 "hello "
///   CodeSpan 6..12 "code"
///     CodeSpanMarker 6..7 open x1
/// ```
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let sp = node.span();
    let _ = write!(
        out,
        "{}{} {}..{}",
        "  ".repeat(depth),
        node.kind_name(),
        sp.start,
        sp.end
    );
    let _ = match node {
        Node::Text { value, .. } | Node::CharacterReference { value, .. } => {
            write!(out, " {value:?}")
        }
        Node::Escape { value, .. } => write!(out, " {value:?}"),
        Node::CodeSpanMarker {
            backticks,
            position,
            ..
        } => {
            let pos = match position {
                MarkerPosition::Open => "open",
                MarkerPosition::Close => "close",
            };
            write!(out, " {pos} x{backticks}")
        }
        Node::BracketMarker { kind, .. } => write!(out, " {kind:?}"),
        Node::LineBreak { hard, .. } => write!(out, " {}", if *hard { "hard" } else { "soft" }),
        Node::Container {
            kind: ContainerKind::CodeSpan { content },
            ..
        } => write!(out, " {content:?}"),
        Node::Container { .. } => Ok(()),
    };
    out.push('\n');
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}
