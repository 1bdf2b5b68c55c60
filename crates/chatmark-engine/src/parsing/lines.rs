use super::{inline::kinds::LineBreak, span::Span};

/// A reference to a single line of the buffer with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the line ending if present).
    pub span: Span,
    /// The line text, line ending included.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`, the same endings the inline
/// scanner recognizes. Line endings stay attached to their line, which keeps
/// spans contiguous: each line starts exactly where the previous one ended.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let bytes = source.as_bytes();
    let mut offset = 0usize;
    std::iter::from_fn(move || {
        if offset >= bytes.len() {
            return None;
        }
        let start = offset;
        offset = match bytes[start..]
            .iter()
            .position(|&b| LineBreak::is_line_ending(b))
        {
            Some(i) => start + i + LineBreak::ending_len(&bytes[start + i..]),
            None => bytes.len(),
        };
        Some(LineRef {
            span: Span::new(start, offset),
            text: &source[start..offset],
        })
    })
}
