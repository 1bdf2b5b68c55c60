pub mod blocks;
pub mod inline;
pub mod lines;
pub mod node;
pub mod snapshot;
pub mod span;

use log::debug;
use serde::Serialize;

use crate::{error::ParseError, inspect::inspect, options::InlineOptions};

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use lines::lines_with_spans;
use node::{ContainerKind, Node};
use span::Span;

pub use inline::parse_inline;

/// A parsed buffer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// A `Container` of kind `Document` spanning the whole buffer.
    pub root: Node,
}

impl Document {
    /// The paragraph containers, in source order.
    pub fn paragraphs(&self) -> &[Node] {
        self.root.children()
    }

    /// Walks the tree; see [`inspect`](crate::inspect::inspect).
    pub fn inspect<F>(&self, visit: F)
    where
        F: FnMut(&Node) -> bool,
    {
        inspect(&self.root, visit);
    }
}

/// Parses a whole buffer: paragraphs first, then the inline content of each.
pub fn parse_document(source: &str, options: &InlineOptions) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(source) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let paragraphs: Vec<Node> = builder
        .finish()
        .iter()
        .map(|b| parse_paragraph(source, b, options))
        .collect();

    debug!(
        "parsed {} paragraph(s) from {} bytes",
        paragraphs.len(),
        source.len()
    );

    Document {
        root: Node::Container {
            span: Span::new(0, source.len()),
            kind: ContainerKind::Document,
            children: paragraphs,
        },
    }
}

/// Like [`parse_document`], for a raw byte buffer.
///
/// # Errors
/// Returns [`ParseError::InvalidUtf8`] before parsing anything if `source`
/// is not valid UTF-8.
pub fn parse_bytes(source: &[u8], options: &InlineOptions) -> Result<Document, ParseError> {
    let source = std::str::from_utf8(source)?;
    Ok(parse_document(source, options))
}

/// Inline-parses one paragraph's content span.
fn parse_paragraph(source: &str, b: &BlockNode, options: &InlineOptions) -> Node {
    let sp = b.content_span;
    Node::Container {
        span: sp,
        kind: ContainerKind::Paragraph,
        children: parse_inline(sp.start, &source[sp.start..sp.end], options),
    }
}
