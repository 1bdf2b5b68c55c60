use std::collections::HashSet;

use log::trace;

use crate::{
    options::{CharRefSpans, InlineOptions},
    parsing::{
        node::{BracketKind, Node},
        span::Span,
    },
};

use super::{
    cursor::Cursor,
    kinds::{Bracket, CharRef, CodeSpan, Escape, LineBreak},
    token::Token,
};

/// Bytes that may start a non-literal construct.
fn is_trigger(b: u8) -> bool {
    matches!(
        b,
        Escape::BACKSLASH
            | CodeSpan::TICK
            | CharRef::AMP
            | Bracket::BANG
            | Bracket::OPEN
            | Bracket::CLOSE
    ) || LineBreak::is_line_ending(b)
}

/// Single left-to-right pass over one contiguous span of inline content.
///
/// Every byte of the span ends up in exactly one token. Decisions are made
/// strictly in scan order: once a token is emitted it is never revisited.
pub struct Scanner<'a> {
    cur: Cursor<'a>,
    char_ref_spans: CharRefSpans,
    out: Vec<Token>,
    /// Backtick run lengths known to have no closer in the rest of the input.
    unclosed_runs: HashSet<usize>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `s`, whose first byte sits at `base` in the buffer.
    pub fn new(s: &'a str, base: usize, options: &InlineOptions) -> Self {
        Self {
            cur: Cursor::new(s, base),
            char_ref_spans: options.char_ref_spans,
            out: vec![],
            unclosed_runs: HashSet::new(),
        }
    }

    /// Scans the whole input into tokens.
    pub fn scan(mut self) -> Vec<Token> {
        while let Some(b) = self.cur.peek() {
            match b {
                Escape::BACKSLASH => self.scan_backslash(),
                CodeSpan::TICK => self.scan_backticks(),
                CharRef::AMP => self.scan_char_ref(),
                Bracket::BANG => self.scan_bang(),
                Bracket::OPEN => self.push_bracket(BracketKind::LinkOpen),
                Bracket::CLOSE => self.push_bracket(BracketKind::Close),
                LineBreak::LF | LineBreak::CR => self.scan_line_ending(),
                _ => self.scan_literal(),
            }
        }
        self.out
    }

    fn scan_literal(&mut self) {
        let start = self.cur.pos();
        self.cur.bump_while(|b| !is_trigger(b));
        self.out.push(Token::Literal(Span::new(start, self.cur.pos())));
    }

    /// Emits a trigger that resolved to nothing as plain text of its own.
    fn push_degraded(&mut self, len: usize) {
        let start = self.cur.pos();
        let value = self.cur.slice(self.cur.i, self.cur.i + len).to_string();
        trace!("degraded {value:?} at {start}");
        self.cur.bump_n(len);
        self.out.push(Token::Node(Node::Text {
            span: Span::new(start, start + len),
            value,
        }));
    }

    fn scan_backslash(&mut self) {
        let start = self.cur.pos();
        match self.cur.peek_at(1) {
            Some(b) if Escape::is_escapable(b) => {
                self.cur.bump_n(2);
                self.out.push(Token::Node(Node::Escape {
                    span: Span::new(start + 1, start + 2),
                    value: char::from(b),
                }));
            }
            Some(b) if LineBreak::is_line_ending(b) => {
                self.cur.bump();
                self.finish_line_break(start, true);
            }
            _ => self.push_degraded(1),
        }
    }

    fn scan_backticks(&mut self) {
        let start = self.cur.pos();
        let n = self.cur.run_len(CodeSpan::TICK);
        let after = self.cur.i + n;

        if !self.unclosed_runs.contains(&n) {
            let rest = &self.cur.s.as_bytes()[after..];
            if let Some(offset) = CodeSpan::find_closer(rest, n) {
                let close_at = after + offset;
                let content = CodeSpan::normalize(self.cur.slice(after, close_at));
                let close = Span::new(self.cur.abs(close_at), self.cur.abs(close_at + n));
                self.cur.bump_n(n + offset + n);
                self.out.push(Token::CodeSpan {
                    open: Span::new(start, start + n),
                    close,
                    backticks: n,
                    content,
                });
                return;
            }
            self.unclosed_runs.insert(n);
        }
        self.push_degraded(n);
    }

    fn scan_char_ref(&mut self) {
        let start = self.cur.pos();
        let Some((value, consumed)) = CharRef::decode(self.cur.rest()) else {
            self.push_degraded(1);
            return;
        };
        self.cur.bump_n(consumed);
        let span = match self.char_ref_spans {
            CharRefSpans::Source => Span::new(start, start + consumed),
            CharRefSpans::Decoded => Span::new(start, start + value.len()),
        };
        self.out
            .push(Token::Node(Node::CharacterReference { span, value }));
    }

    fn scan_bang(&mut self) {
        if self.cur.starts_with(Bracket::IMAGE_OPEN) {
            self.push_bracket(BracketKind::ImageOpen);
        } else {
            self.push_degraded(1);
        }
    }

    fn push_bracket(&mut self, kind: BracketKind) {
        let start = self.cur.pos();
        let len = kind.as_str().len();
        self.cur.bump_n(len);
        self.out.push(Token::Node(Node::BracketMarker {
            span: Span::new(start, start + len),
            kind,
        }));
    }

    /// A line ending inside the content. Trailing spaces/tabs are taken
    /// back from the preceding literal run and become part of the break.
    fn scan_line_ending(&mut self) {
        let pos = self.cur.pos();
        let mut start = pos;
        let mut spaces = 0;

        if let Some(Token::Literal(lit)) = self.out.last_mut()
            && lit.end == pos
        {
            let local = self.cur.slice(lit.start - self.cur.base, lit.end - self.cur.base);
            let bytes = local.as_bytes();
            spaces = bytes.iter().rev().take_while(|&&b| b == b' ').count();
            let trailing = bytes
                .iter()
                .rev()
                .take_while(|&&b| LineBreak::is_inline_space(b))
                .count();
            start = lit.end - trailing;
            lit.end = start;
            if lit.is_empty() {
                self.out.pop();
            }
        }

        self.finish_line_break(start, spaces >= LineBreak::HARD_BREAK_SPACES);
    }

    /// Consumes the line ending at the cursor plus the next line's leading
    /// spaces/tabs, and emits the break starting at `start`.
    fn finish_line_break(&mut self, start: usize, hard: bool) {
        let len = LineBreak::ending_len(self.cur.rest());
        self.cur.bump_n(len);
        self.cur.bump_while(LineBreak::is_inline_space);
        self.out.push(Token::Node(Node::LineBreak {
            span: Span::new(start, self.cur.pos()),
            hard,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(s: &str) -> Vec<Token> {
        Scanner::new(s, 0, &InlineOptions::default()).scan()
    }

    fn text(start: usize, end: usize, value: &str) -> Token {
        Token::Node(Node::Text {
            span: Span::new(start, end),
            value: value.into(),
        })
    }

    fn lit(start: usize, end: usize) -> Token {
        Token::Literal(Span::new(start, end))
    }

    #[test]
    fn plain_text_is_one_literal() {
        assert_eq!(scan("hello world"), vec![lit(0, 11)]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn lone_bang_degrades_to_its_own_text() {
        assert_eq!(scan("hello!"), vec![lit(0, 5), text(5, 6, "!")]);
    }

    #[test]
    fn escape_span_excludes_backslash() {
        assert_eq!(
            scan("\\*hello\\*"),
            vec![
                Token::Node(Node::Escape {
                    span: Span::new(1, 2),
                    value: '*'
                }),
                lit(2, 7),
                Token::Node(Node::Escape {
                    span: Span::new(8, 9),
                    value: '*'
                }),
            ]
        );
    }

    #[test]
    fn backslash_before_letter_is_literal() {
        assert_eq!(
            scan("foo\\x"),
            vec![lit(0, 3), text(3, 4, "\\"), lit(4, 5)]
        );
    }

    #[test]
    fn trailing_backslash_is_literal() {
        assert_eq!(scan("a\\"), vec![lit(0, 1), text(1, 2, "\\")]);
    }

    #[test]
    fn escaped_backtick_does_not_open_code_span() {
        let tokens = scan("\\`a`");
        assert_eq!(tokens[0].span(), Span::new(1, 2));
        assert_eq!(tokens[2], text(3, 4, "`"));
    }

    #[test]
    fn code_span_covers_both_fences() {
        assert_eq!(
            scan("hello `code` world"),
            vec![
                lit(0, 6),
                Token::CodeSpan {
                    open: Span::new(6, 7),
                    close: Span::new(11, 12),
                    backticks: 1,
                    content: "code".into(),
                },
                lit(12, 18),
            ]
        );
    }

    #[test]
    fn double_fence_contains_single_backticks() {
        let tokens = scan("hello `` `code` `` world");
        assert_eq!(
            tokens[1],
            Token::CodeSpan {
                open: Span::new(6, 8),
                close: Span::new(16, 18),
                backticks: 2,
                content: "`code`".into(),
            }
        );
        assert_eq!(tokens[2], lit(18, 24));
    }

    #[test]
    fn unmatched_run_degrades_whole() {
        assert_eq!(
            scan("a ``b` c"),
            vec![lit(0, 2), text(2, 4, "``"), lit(4, 5), text(5, 6, "`"), lit(6, 8)]
        );
    }

    #[test]
    fn degraded_run_is_never_reopened() {
        // The first run has no closer; the second pairs with the third.
        let tokens = scan("`` a ` b `");
        assert_eq!(tokens[0], text(0, 2, "``"));
        assert!(matches!(
            tokens[2],
            Token::CodeSpan { backticks: 1, ref content, .. } if content == "b"
        ));
    }

    #[test]
    fn char_ref_source_span() {
        assert_eq!(
            scan("&quot;test"),
            vec![
                Token::Node(Node::CharacterReference {
                    span: Span::new(0, 6),
                    value: "\"".into()
                }),
                lit(6, 10),
            ]
        );
    }

    #[test]
    fn char_ref_decoded_span() {
        let opts = InlineOptions {
            char_ref_spans: CharRefSpans::Decoded,
        };
        let tokens = Scanner::new("&quot;test", 0, &opts).scan();
        assert_eq!(tokens[0].span(), Span::new(0, 1));
        assert_eq!(tokens[1], lit(6, 10));
    }

    #[test]
    fn unknown_entity_degrades_ampersand_only() {
        assert_eq!(scan("&mattermost;"), vec![text(0, 1, "&"), lit(1, 12)]);
    }

    #[test]
    fn brackets_are_markers() {
        let kinds: Vec<_> = scan("![a][b]")
            .into_iter()
            .filter_map(|t| match t {
                Token::Node(Node::BracketMarker { span, kind }) => Some((span, kind)),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                (Span::new(0, 2), BracketKind::ImageOpen),
                (Span::new(3, 4), BracketKind::Close),
                (Span::new(4, 5), BracketKind::LinkOpen),
                (Span::new(6, 7), BracketKind::Close),
            ]
        );
    }

    #[test]
    fn soft_break_takes_surrounding_spaces() {
        assert_eq!(
            scan("a \n  b"),
            vec![
                lit(0, 1),
                Token::Node(Node::LineBreak {
                    span: Span::new(1, 5),
                    hard: false
                }),
                lit(5, 6),
            ]
        );
    }

    #[test]
    fn two_spaces_make_a_hard_break() {
        let tokens = scan("a  \r\nb");
        assert_eq!(
            tokens[1],
            Token::Node(Node::LineBreak {
                span: Span::new(1, 5),
                hard: true
            })
        );
    }

    #[test]
    fn backslash_line_ending_is_hard_break() {
        assert_eq!(
            scan("a\\\nb"),
            vec![
                lit(0, 1),
                Token::Node(Node::LineBreak {
                    span: Span::new(1, 3),
                    hard: true
                }),
                lit(3, 4),
            ]
        );
    }

    #[test]
    fn whitespace_only_line_before_break_is_dropped_from_text() {
        // "!" is a degraded token, so the following spaces form their own run.
        let tokens = scan("!  \nb");
        assert_eq!(tokens[0], text(0, 1, "!"));
        assert_eq!(
            tokens[1],
            Token::Node(Node::LineBreak {
                span: Span::new(1, 4),
                hard: true
            })
        );
    }

    #[test]
    fn base_offset_applies_to_every_span() {
        let tokens = Scanner::new("x[", 10, &InlineOptions::default()).scan();
        assert_eq!(tokens[0], lit(10, 11));
        assert_eq!(tokens[1].span(), Span::new(11, 12));
    }

    #[test]
    fn tokens_cover_input_without_gaps() {
        let s = "a `b` &amp; \\* ![c] d\\e &bogus; ``";
        let tokens = scan(s);
        let mut pos = 0;
        for t in &tokens {
            let sp = t.span();
            // Escapes hide their backslash.
            let expected_start = match t {
                Token::Node(Node::Escape { .. }) => pos + 1,
                _ => pos,
            };
            assert_eq!(sp.start, expected_start, "gap before {t:?}");
            pos = sp.end;
        }
        assert_eq!(pos, s.len());
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let s = "héllo [wörld]";
        for t in scan(s) {
            assert!(t.span().slice(s).is_some(), "{t:?} splits a character");
        }
    }
}
