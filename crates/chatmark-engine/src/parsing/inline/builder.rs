use crate::parsing::{
    node::{ContainerKind, MarkerPosition, Node},
    span::Span,
};

use super::token::Token;

/// Turns the scanner's token stream into inline nodes.
///
/// Adjacent literal runs coalesce into a single `Text` node. Every other
/// token becomes a node of its own, so a degraded `!` next to literal text
/// stays individually addressable.
pub struct TreeBuilder<'a> {
    s: &'a str,
    base: usize,
    pending: Option<Span>,
    out: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    /// `s` is the scanned content, whose first byte sits at `base`.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self {
            s,
            base,
            pending: None,
            out: vec![],
        }
    }

    pub fn push(&mut self, token: Token) {
        match token {
            Token::Literal(span) => self.extend_text(span),
            Token::Node(node) => {
                self.flush_text();
                self.out.push(node);
            }
            Token::CodeSpan {
                open,
                close,
                backticks,
                content,
            } => {
                self.flush_text();
                self.out.push(Node::Container {
                    span: Span::new(open.start, close.end),
                    kind: ContainerKind::CodeSpan { content },
                    children: vec![
                        Node::CodeSpanMarker {
                            span: open,
                            backticks,
                            position: MarkerPosition::Open,
                        },
                        Node::CodeSpanMarker {
                            span: close,
                            backticks,
                            position: MarkerPosition::Close,
                        },
                    ],
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Node> {
        self.flush_text();
        self.out
    }

    fn extend_text(&mut self, span: Span) {
        match self.pending {
            Some(p) if p.end == span.start => self.pending = Some(Span::new(p.start, span.end)),
            _ => {
                self.flush_text();
                self.pending = Some(span);
            }
        }
    }

    fn flush_text(&mut self) {
        let Some(span) = self.pending.take() else {
            return;
        };
        if span.is_empty() {
            return;
        }
        let value = self.s[span.start - self.base..span.end - self.base].to_string();
        self.out.push(Node::Text { span, value });
    }
}

impl<'a> Extend<Token> for TreeBuilder<'a> {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}
