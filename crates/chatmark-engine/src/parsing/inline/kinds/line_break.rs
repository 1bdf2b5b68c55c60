/// Line ending type with owned delimiter constants.
pub struct LineBreak;

impl LineBreak {
    pub const LF: u8 = b'\n';
    pub const CR: u8 = b'\r';

    /// Trailing spaces needed before a line ending to make the break hard.
    pub const HARD_BREAK_SPACES: usize = 2;

    pub fn is_line_ending(b: u8) -> bool {
        b == Self::LF || b == Self::CR
    }

    /// Spaces and tabs around a line ending belong to the break.
    pub fn is_inline_space(b: u8) -> bool {
        b == b' ' || b == b'\t'
    }

    /// Length of the line ending at the start of `rest`: 2 for CRLF,
    /// 1 for LF or a lone CR, 0 otherwise.
    pub fn ending_len(rest: &[u8]) -> usize {
        match rest {
            [Self::CR, Self::LF, ..] => 2,
            [Self::LF, ..] | [Self::CR, ..] => 1,
            _ => 0,
        }
    }
}
