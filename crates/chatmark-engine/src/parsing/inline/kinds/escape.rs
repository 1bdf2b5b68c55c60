/// Backslash escape type with owned delimiter constant.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Whether `b` may follow a backslash to form an escape.
    ///
    /// The escapable set is exactly ASCII punctuation:
    /// ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``
    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }
}
