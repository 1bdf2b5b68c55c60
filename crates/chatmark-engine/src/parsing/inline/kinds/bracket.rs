pub struct Bracket;

impl Bracket {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const BANG: u8 = b'!';
    pub const IMAGE_OPEN: &'static [u8; 2] = b"![";
}
