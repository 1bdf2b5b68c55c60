use crate::parsing::{lines::LineRef, span::Span};

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, line ending included.
    pub line: Span,
    /// Whether the line holds nothing but whitespace.
    pub is_blank: bool,
    /// The line without its line ending and surrounding spaces/tabs.
    pub content: Span,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef<'_>) -> LineClass {
        let without_ending = lr.text.trim_end_matches(['\r', '\n']);
        let is_blank = without_ending.trim_matches([' ', '\t']).is_empty();

        let leading = without_ending.len() - without_ending.trim_start_matches([' ', '\t']).len();
        let trimmed_end = without_ending.trim_end_matches([' ', '\t']).len();

        LineClass {
            line: lr.span,
            is_blank,
            content: Span::new(
                lr.span.start + leading.min(trimmed_end),
                lr.span.start + trimmed_end,
            ),
        }
    }
}
