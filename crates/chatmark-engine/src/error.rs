use thiserror::Error;

/// Errors from [`parse_bytes`](crate::parse_bytes).
///
/// Inline parsing itself never fails: malformed constructs degrade to text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(e: std::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}
