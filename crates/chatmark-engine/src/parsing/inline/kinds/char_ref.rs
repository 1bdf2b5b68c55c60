use crate::parsing::inline::entities::ENTITIES;

/// HTML character reference type with owned delimiter constants.
pub struct CharRef;

impl CharRef {
    pub const AMP: u8 = b'&';
    pub const HASH: u8 = b'#';
    pub const SEMI: u8 = b';';

    /// Longest entity name we bother looking up.
    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_DECIMAL_DIGITS: usize = 7;
    pub const MAX_HEX_DIGITS: usize = 6;

    /// Decodes the character reference at the start of `rest`.
    ///
    /// `rest` must start with `&`. Returns the decoded text and the number of
    /// bytes consumed (through the terminating `;`), or `None` when the bytes
    /// do not form a recognized, terminated reference.
    pub fn decode(rest: &[u8]) -> Option<(String, usize)> {
        if rest.first() != Some(&Self::AMP) {
            return None;
        }
        if rest.get(1) == Some(&Self::HASH) {
            Self::decode_numeric(rest)
        } else {
            Self::decode_named(rest)
        }
    }

    fn decode_named(rest: &[u8]) -> Option<(String, usize)> {
        let name_len = rest[1..]
            .iter()
            .take(Self::MAX_NAME_LEN + 1)
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 || name_len > Self::MAX_NAME_LEN {
            return None;
        }
        let end = 1 + name_len;
        if rest.get(end) != Some(&Self::SEMI) {
            return None;
        }
        // Alphanumeric ASCII, so always valid UTF-8.
        let name = std::str::from_utf8(&rest[1..end]).ok()?;
        let value = ENTITIES.get(name)?;
        Some(((*value).to_string(), end + 1))
    }

    fn decode_numeric(rest: &[u8]) -> Option<(String, usize)> {
        let (digits_at, radix, max) = match rest.get(2) {
            Some(b'x' | b'X') => (3, 16, Self::MAX_HEX_DIGITS),
            _ => (2, 10, Self::MAX_DECIMAL_DIGITS),
        };
        let digits = rest
            .get(digits_at..)?
            .iter()
            .take(max + 1)
            .take_while(|b| {
                if radix == 16 {
                    b.is_ascii_hexdigit()
                } else {
                    b.is_ascii_digit()
                }
            })
            .count();
        if digits == 0 || digits > max {
            return None;
        }
        let end = digits_at + digits;
        if rest.get(end) != Some(&Self::SEMI) {
            return None;
        }
        let text = std::str::from_utf8(&rest[digits_at..end]).ok()?;
        let code = u32::from_str_radix(text, radix).ok()?;
        Some((Self::codepoint(code).to_string(), end + 1))
    }

    /// Maps a numeric reference to a character. NUL, surrogates and values
    /// past U+10FFFF become U+FFFD.
    pub fn codepoint(code: u32) -> char {
        if code == 0 {
            return char::REPLACEMENT_CHARACTER;
        }
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}
