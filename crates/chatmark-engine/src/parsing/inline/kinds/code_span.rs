/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": nothing inside them is scanned.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Finds a closing fence of exactly `n` backticks in `rest`.
    ///
    /// Returns the offset of the closer's first byte. Runs of any other
    /// length are skipped whole, so a longer run never closes a shorter
    /// opener by matching part of itself.
    pub fn find_closer(rest: &[u8], n: usize) -> Option<usize> {
        let mut i = 0;
        while i < rest.len() {
            if rest[i] != Self::TICK {
                i += 1;
                continue;
            }
            let run = rest[i..].iter().take_while(|&&b| b == Self::TICK).count();
            if run == n {
                return Some(i);
            }
            i += run;
        }
        None
    }

    /// Normalizes code span content: trims it and collapses every
    /// whitespace run (line endings included) to a single space.
    pub fn normalize(inner: &str) -> String {
        inner.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
