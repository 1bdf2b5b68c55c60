use crate::parsing::{node::Node, span::Span};

/// A raw token produced by the [`Scanner`](super::scanner::Scanner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of bytes no trigger applied to. Adjacent runs coalesce into
    /// one `Text` node.
    Literal(Span),
    /// A resolved or degraded special token, already in its final form.
    /// Never merged with neighbouring text.
    Node(Node),
    /// A code span whose opening fence found a closer of equal length.
    CodeSpan {
        open: Span,
        close: Span,
        backticks: usize,
        content: String,
    },
}

impl Token {
    /// Full byte span covered by the token.
    pub fn span(&self) -> Span {
        match self {
            Token::Literal(sp) => *sp,
            Token::Node(n) => n.span(),
            Token::CodeSpan { open, close, .. } => Span::new(open.start, close.end),
        }
    }
}
