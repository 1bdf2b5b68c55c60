use log::trace;

use crate::parsing::span::Span;

use super::classify::LineClass;

/// A paragraph found by the block pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    /// Full byte span of the paragraph's lines, last line ending included.
    pub span: Span,
    /// Content handed to inline parsing: from the first non-space byte of
    /// the first line to the last non-space byte of the last line.
    pub content_span: Span,
}

#[derive(Debug, Clone, Copy)]
enum LeafState {
    None,
    Paragraph {
        start: Span,
        content_start: usize,
        content_end: usize,
        last_line_end: usize,
    },
}

pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_blank {
            self.flush_paragraph();
            return;
        }
        self.extend_paragraph(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        self.leaf = match self.leaf {
            LeafState::Paragraph {
                start,
                content_start,
                ..
            } => LeafState::Paragraph {
                start,
                content_start,
                content_end: c.content.end,
                last_line_end: c.line.end,
            },
            LeafState::None => LeafState::Paragraph {
                start: c.line,
                content_start: c.content.start,
                content_end: c.content.end,
                last_line_end: c.line.end,
            },
        };
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Paragraph {
            start,
            content_start,
            content_end,
            last_line_end,
        } = prev
        {
            let block = BlockNode {
                span: Span::new(start.start, last_line_end),
                content_span: Span::new(content_start, content_end),
            };
            trace!("paragraph {:?}", block.content_span);
            self.out.push(block);
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
