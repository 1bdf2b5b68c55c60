use std::borrow::Cow;

use serde::Serialize;

use super::span::Span;

/// Whether a code span fence opens or closes the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerPosition {
    Open,
    Close,
}

/// An unresolved bracket awaiting link/image resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BracketKind {
    /// `[`
    LinkOpen,
    /// `![`
    ImageOpen,
    /// `]`
    Close,
}

impl BracketKind {
    /// The source text of this marker.
    pub fn as_str(self) -> &'static str {
        match self {
            BracketKind::LinkOpen => "[",
            BracketKind::ImageOpen => "![",
            BracketKind::Close => "]",
        }
    }
}

/// What a [`Node::Container`] groups.
///
/// Later passes (emphasis, link resolution) wrap existing nodes in
/// containers of their own kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ContainerKind {
    /// The whole buffer.
    Document,
    /// A run of non-blank lines.
    Paragraph,
    /// A resolved code span. Children are the two fence markers.
    CodeSpan {
        /// Inner text, trimmed, with whitespace runs collapsed to one space.
        content: String,
    },
}

/// A node in the inline syntax tree.
///
/// Every variant carries the byte span it occupies in the source buffer.
/// Text-like leaves also carry their decoded text, copied out of the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// Literal text.
    Text { span: Span, value: String },
    /// A backslash-escaped punctuation character. The span excludes the backslash.
    Escape { span: Span, value: char },
    /// A decoded named or numeric HTML character reference.
    CharacterReference { span: Span, value: String },
    /// One fence of a resolved code span.
    CodeSpanMarker {
        span: Span,
        backticks: usize,
        position: MarkerPosition,
    },
    /// An unresolved `[`, `![` or `]`.
    BracketMarker { span: Span, kind: BracketKind },
    /// A line ending inside a paragraph, with the whitespace around it.
    LineBreak { span: Span, hard: bool },
    /// A resolved structure grouping other nodes.
    Container {
        span: Span,
        kind: ContainerKind,
        children: Vec<Node>,
    },
}

impl Node {
    /// The byte span this node occupies in the source buffer.
    pub fn span(&self) -> Span {
        match self {
            Node::Text { span, .. }
            | Node::Escape { span, .. }
            | Node::CharacterReference { span, .. }
            | Node::CodeSpanMarker { span, .. }
            | Node::BracketMarker { span, .. }
            | Node::LineBreak { span, .. }
            | Node::Container { span, .. } => *span,
        }
    }

    /// Child nodes, in source order. Empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// The literal text this node renders as, for text-like leaves.
    ///
    /// Returns `None` for containers, code span fences and line breaks.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Node::Text { value, .. } | Node::CharacterReference { value, .. } => {
                Some(Cow::Borrowed(value.as_str()))
            }
            Node::Escape { value, .. } => Some(Cow::Owned(value.to_string())),
            Node::BracketMarker { kind, .. } => Some(Cow::Borrowed(kind.as_str())),
            Node::CodeSpanMarker { .. } | Node::LineBreak { .. } | Node::Container { .. } => None,
        }
    }

    /// Short label for the variant, used in outlines and log lines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Text { .. } => "Text",
            Node::Escape { .. } => "Escape",
            Node::CharacterReference { .. } => "CharacterReference",
            Node::CodeSpanMarker { .. } => "CodeSpanMarker",
            Node::BracketMarker { .. } => "BracketMarker",
            Node::LineBreak { .. } => "LineBreak",
            Node::Container { kind, .. } => match kind {
                ContainerKind::Document => "Document",
                ContainerKind::Paragraph => "Paragraph",
                ContainerKind::CodeSpan { .. } => "CodeSpan",
            },
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container { .. })
    }
}
