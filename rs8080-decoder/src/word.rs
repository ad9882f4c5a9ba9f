use std::fmt::{self, Display, Formatter};

/// 16 bit value as it is laid out in the instruction stream:
/// byte 2 is the low half, byte 3 the high half.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub hi: u8,
    pub lo: u8,
}

impl Word {
    pub fn new(lo: u8, hi: u8) -> Word {
        Word { lo, hi }
    }
}

impl From<Word> for u16 {
    fn from(x: Word) -> Self {
        ((x.hi as u16) << 8) | x.lo as u16
    }
}

/// Four hex digits, high byte first
impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}", self.hi, self.lo)
    }
}

#[cfg(test)]
mod tests {
    use super::Word;

    #[test]
    fn little_endian() {
        let w = Word::new(0x34, 0x12);
        assert_eq!(0x1234u16, w.into());
        assert_eq!("1234", w.to_string());
    }

    #[test]
    fn keeps_leading_zeros() {
        assert_eq!("0008", Word::new(0x08, 0x00).to_string());
        assert_eq!(0x0800u16, Word::new(0x00, 0x08).into());
    }
}
