use crate::Word;
use std::fmt::{self, Display, Formatter};
use Operand::*;

/// What follows the opcode, as declared by the opcode table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandKind {
    Implied,
    D8,
    D16,
    A16,
    Port,
}

impl OperandKind {
    /// Number of bytes after the opcode
    pub const fn size(self) -> u8 {
        match self {
            OperandKind::Implied => 0,
            OperandKind::D8 | OperandKind::Port => 1,
            OperandKind::D16 | OperandKind::A16 => 2,
        }
    }

    /// Builds the operand from the bytes after the opcode.
    ///
    /// `bytes` must hold at least `size()` bytes; anything beyond that is ignored.
    pub fn read(self, bytes: &[u8]) -> Option<Operand> {
        match (self, bytes) {
            (OperandKind::Implied, _) => None,
            (OperandKind::D8, [d8, ..]) => Some(D8(*d8)),
            (OperandKind::Port, [port, ..]) => Some(Port(*port)),
            (OperandKind::D16, [lo, hi, ..]) => Some(D16(Word::new(*lo, *hi))),
            (OperandKind::A16, [lo, hi, ..]) => Some(Addr(Word::new(*lo, *hi))),
            _ => None,
        }
    }
}

/// Concrete operand read from the instruction stream
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand {
    D8(u8),
    D16(Word),
    Addr(Word),
    Port(u8),
}

impl Operand {
    pub fn value(&self) -> u16 {
        match *self {
            D8(x) | Port(x) => x as u16,
            D16(w) | Addr(w) => w.into(),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            D8(d8) => write!(f, "#${:02X}", d8),
            D16(w) => write!(f, "#${}", w),
            Addr(w) => write!(f, "${}", w),
            Port(port) => write!(f, "${:02X}", port),
        }
    }
}
