//! The piece codec: a piece is a 4-bit code, and its text descriptor
//! encodes each bit as one of a fixed pair of letters.

use std::fmt;

/// Number of binary attributes a piece carries.
pub const NUM_ATTRIBS: u32 = 4;

/// Total number of distinct pieces (`2^NUM_ATTRIBS`).
pub const NUM_PIECES: u8 = 16;

/// Bitmask with every attribute bit set.
pub const ALL_ATTRIBS: u8 = 15;

/// Errors produced when decoding a piece from its text descriptor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseDescriptorError {
    #[error("expected a {expected}-character descriptor, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("invalid descriptor character: {0:?}")]
    InvalidChar(char),
}

/// One of the 16 Quarto pieces, identified by a 4-bit code.
///
/// Bit 3 = shape (1 = round), bit 2 = fill (1 = flat), bit 1 = height
/// (1 = short), bit 0 = color (1 = light).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    code: u8,
}

impl Piece {
    pub const SHAPE_BIT: u8 = 0x8;
    pub const FILL_BIT: u8 = 0x4;
    pub const HEIGHT_BIT: u8 = 0x2;
    pub const COLOR_BIT: u8 = 0x1;

    pub fn new(code: u8) -> Self {
        debug_assert!(code < NUM_PIECES, "piece code out of range: {code}");
        Self { code }
    }

    pub fn code(self) -> u8 {
        self.code
    }

    /// The bit this piece occupies in a 16-bit used-piece mask.
    pub fn bit(self) -> u16 {
        1u16 << self.code
    }

    pub fn has_attrib(self, mask: u8) -> bool {
        self.code & mask != 0
    }

    /// Parses a 4-character descriptor into a piece code.
    pub fn parse_desc(s: &str) -> Result<Self, ParseDescriptorError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != NUM_ATTRIBS as usize {
            return Err(ParseDescriptorError::WrongLength {
                expected: NUM_ATTRIBS as usize,
                actual: chars.len(),
            });
        }

        let mut code = 0u8;
        for (i, ch) in chars.iter().enumerate() {
            let bit = 1u8 << (NUM_ATTRIBS as usize - 1 - i);
            let set = match (i, ch.to_ascii_lowercase()) {
                (0, 'r') => true,
                (0, 'q') => false,
                (1, 'f') => true,
                (1, 'h') => false,
                (2, 's') => true,
                (2, 't') => false,
                (3, 'l') => true,
                (3, 'd') => false,
                (_, c) => return Err(ParseDescriptorError::InvalidChar(c)),
            };
            if set {
                code |= bit;
            }
        }
        Ok(Self::new(code))
    }

    /// Formats this piece back into its 4-character descriptor.
    pub fn format_desc(self) -> String {
        let shape = if self.has_attrib(Self::SHAPE_BIT) { 'r' } else { 'q' };
        let fill = if self.has_attrib(Self::FILL_BIT) { 'f' } else { 'h' };
        let height = if self.has_attrib(Self::HEIGHT_BIT) { 's' } else { 't' };
        let color = if self.has_attrib(Self::COLOR_BIT) { 'l' } else { 'd' };
        [shape, fill, height, color].iter().collect()
    }

    /// All 16 pieces, in code order.
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..NUM_PIECES).map(Piece::new)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_desc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_codes() {
        for code in 0..NUM_PIECES {
            let p = Piece::new(code);
            let desc = p.format_desc();
            let parsed = Piece::parse_desc(&desc).expect("valid descriptor");
            assert_eq!(parsed.code(), code, "round trip failed for code {code}");
        }
    }

    #[test]
    fn code_ten_is_rhsd() {
        let p = Piece::new(10);
        assert_eq!(p.format_desc(), "rhsd");
        assert_eq!(Piece::parse_desc("rhsd").unwrap(), p);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Piece::parse_desc("rhs").unwrap_err();
        assert_eq!(
            err,
            ParseDescriptorError::WrongLength { expected: 4, actual: 3 }
        );
    }

    #[test]
    fn invalid_char_is_rejected() {
        let err = Piece::parse_desc("rhsx").unwrap_err();
        assert_eq!(err, ParseDescriptorError::InvalidChar('x'));
    }

    #[test]
    fn uppercase_is_accepted() {
        assert_eq!(Piece::parse_desc("RHSD").unwrap(), Piece::new(10));
    }
}
