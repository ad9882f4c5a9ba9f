use crate::{FlagsAffected, Mnemonic, OperandKind};
use std::fmt::{self, Formatter};

/// One row of the opcode table
#[derive(Debug, PartialEq, Eq)]
pub struct Descriptor {
    /// Instruction text with operand placeholders, e.g. `MVI B, d8`
    pub mnemonic: &'static str,
    pub family: Mnemonic,
    /// Transfer notation with `{d8}`, `{lo}`, `{hi}`, `{a16}`, `{port}` and
    /// `{op}` placeholders, see [`crate::render_operation`]
    pub operation: &'static str,
    pub operand: OperandKind,
    /// Total length including the opcode
    pub length: u8,
    pub flags: FlagsAffected,
    pub cycles: Cycles,
}

/// Clock states an instruction takes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cycles {
    pub states: u8,
    /// Conditional calls and returns take longer when the condition holds
    pub taken: Option<u8>,
}

impl fmt::Display for Cycles {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.taken {
            Some(taken) => write!(f, "{}/{}", self.states, taken),
            None => write!(f, "{}", self.states),
        }
    }
}

impl Descriptor {
    pub fn is_unknown(&self) -> bool {
        self.family == Mnemonic::Unknown
    }
}

macro_rules! op {
    ($family:ident, $states:literal $(/ $taken:literal)?, $mnemonic:literal, $operation:literal) => {
        op!($family, $states $(/ $taken)?, $mnemonic, $operation, Implied, NONE)
    };
    ($family:ident, $states:literal $(/ $taken:literal)?, $mnemonic:literal, $operation:literal, $flags:ident) => {
        op!($family, $states $(/ $taken)?, $mnemonic, $operation, Implied, $flags)
    };
    ($family:ident, $states:literal $(/ $taken:literal)?, $mnemonic:literal, $operation:literal, $operand:ident, $flags:ident) => {
        Descriptor {
            mnemonic: $mnemonic,
            family: Mnemonic::$family,
            operation: $operation,
            operand: OperandKind::$operand,
            length: 1 + OperandKind::$operand.size(),
            flags: FlagsAffected::$flags,
            cycles: Cycles {
                states: $states,
                taken: taken!($($taken)?),
            },
        }
    };
}

macro_rules! taken {
    () => {
        None
    };
    ($taken:literal) => {
        Some($taken)
    };
}

// Records shared by several opcode values
pub static NOP: Descriptor = op!(NOP, 4, "NOP", "No operation");
pub static JMP: Descriptor = op!(JMP, 10, "JMP a16", "(PC) <= {a16}", A16, NONE);
pub static CALL: Descriptor = op!(
    CALL,
    17,
    "CALL a16",
    "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}",
    A16,
    NONE
);
pub static RET: Descriptor = op!(
    RET,
    10,
    "RET",
    "(PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"
);

/// Byte values outside the documented instruction set
pub static UNKNOWN: Descriptor = op!(Unknown, 4, "???", "Unrecognized instruction {op}");

/// Undocumented byte values, each a synonym of NOP, JMP, CALL or RET
pub const UNDOCUMENTED: [u8; 12] = [
    0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD,
];

pub fn is_undocumented(opcode: u8) -> bool {
    UNDOCUMENTED.contains(&opcode)
}

/// Picks the table row for `opcode`.
///
/// With `undocumented` off the alias values resolve to [`UNKNOWN`].
pub fn lookup(opcode: u8, undocumented: bool) -> &'static Descriptor {
    if !undocumented && is_undocumented(opcode) {
        &UNKNOWN
    } else {
        OPCODES[opcode as usize]
    }
}

#[rustfmt::skip]
pub static OPCODES: [&Descriptor; 256] = [
    // 0x00
    &NOP,
    &op!(LXI, 10, "LXI B, d16", "(B) <= {hi}, (C) <= {lo}", D16, NONE),
    &op!(STAX, 7, "STAX B", "((B)(C)) <= (A)"),
    &op!(INX, 5, "INX B", "(B)(C) <= (B)(C) + 1"),
    &op!(INR, 5, "INR B", "(B) <= (B) + 1", ZSPAC),
    &op!(DCR, 5, "DCR B", "(B) <= (B) - 1", ZSPAC),
    &op!(MVI, 7, "MVI B, d8", "(B) <= {d8}", D8, NONE),
    &op!(RLC, 4, "RLC", "(An+1) <= (An), (A0) <= (A7), (CY) <= (A7)", CY),
    &NOP,
    &op!(DAD, 10, "DAD B", "(H)(L) <= (H)(L) + (B)(C)", CY),
    &op!(LDAX, 7, "LDAX B", "(A) <= ((B)(C))"),
    &op!(DCX, 5, "DCX B", "(B)(C) <= (B)(C) - 1"),
    &op!(INR, 5, "INR C", "(C) <= (C) + 1", ZSPAC),
    &op!(DCR, 5, "DCR C", "(C) <= (C) - 1", ZSPAC),
    &op!(MVI, 7, "MVI C, d8", "(C) <= {d8}", D8, NONE),
    &op!(RRC, 4, "RRC", "(An) <= (An+1), (A7) <= (A0), (CY) <= (A0)", CY),
    // 0x10
    &NOP,
    &op!(LXI, 10, "LXI D, d16", "(D) <= {hi}, (E) <= {lo}", D16, NONE),
    &op!(STAX, 7, "STAX D", "((D)(E)) <= (A)"),
    &op!(INX, 5, "INX D", "(D)(E) <= (D)(E) + 1"),
    &op!(INR, 5, "INR D", "(D) <= (D) + 1", ZSPAC),
    &op!(DCR, 5, "DCR D", "(D) <= (D) - 1", ZSPAC),
    &op!(MVI, 7, "MVI D, d8", "(D) <= {d8}", D8, NONE),
    &op!(RAL, 4, "RAL", "(An+1) <= (An), (CY) <= (A7), (A0) <= (CY)", CY),
    &NOP,
    &op!(DAD, 10, "DAD D", "(H)(L) <= (H)(L) + (D)(E)", CY),
    &op!(LDAX, 7, "LDAX D", "(A) <= ((D)(E))"),
    &op!(DCX, 5, "DCX D", "(D)(E) <= (D)(E) - 1"),
    &op!(INR, 5, "INR E", "(E) <= (E) + 1", ZSPAC),
    &op!(DCR, 5, "DCR E", "(E) <= (E) - 1", ZSPAC),
    &op!(MVI, 7, "MVI E, d8", "(E) <= {d8}", D8, NONE),
    &op!(RAR, 4, "RAR", "(An) <= (An+1), (CY) <= (A0), (A7) <= (CY)", CY),
    // 0x20
    &NOP,
    &op!(LXI, 10, "LXI H, d16", "(H) <= {hi}, (L) <= {lo}", D16, NONE),
    &op!(SHLD, 16, "SHLD a16", "({a16}) <= (L), ({a16} + 1) <= (H)", A16, NONE),
    &op!(INX, 5, "INX H", "(H)(L) <= (H)(L) + 1"),
    &op!(INR, 5, "INR H", "(H) <= (H) + 1", ZSPAC),
    &op!(DCR, 5, "DCR H", "(H) <= (H) - 1", ZSPAC),
    &op!(MVI, 7, "MVI H, d8", "(H) <= {d8}", D8, NONE),
    &op!(DAA, 4, "DAA", "Decimal Adjust Accumulator", ALL),
    &NOP,
    &op!(DAD, 10, "DAD H", "(H)(L) <= (H)(L) + (H)(L)", CY),
    &op!(LHLD, 16, "LHLD a16", "(L) <= ({a16}), (H) <= ({a16} + 1)", A16, NONE),
    &op!(DCX, 5, "DCX H", "(H)(L) <= (H)(L) - 1"),
    &op!(INR, 5, "INR L", "(L) <= (L) + 1", ZSPAC),
    &op!(DCR, 5, "DCR L", "(L) <= (L) - 1", ZSPAC),
    &op!(MVI, 7, "MVI L, d8", "(L) <= {d8}", D8, NONE),
    &op!(CMA, 4, "CMA", "(A) <= !(A)"),
    // 0x30
    &NOP,
    &op!(LXI, 10, "LXI SP, d16", "(SPH) <= {hi}, (SPL) <= {lo}", D16, NONE),
    &op!(STA, 13, "STA a16", "({a16}) <= (A)", A16, NONE),
    &op!(INX, 5, "INX SP", "(SP) <= (SP) + 1"),
    &op!(INR, 10, "INR M", "((H)(L)) <= ((H)(L)) + 1", ZSPAC),
    &op!(DCR, 10, "DCR M", "((H)(L)) <= ((H)(L)) - 1", ZSPAC),
    &op!(MVI, 10, "MVI M, d8", "((H)(L)) <= {d8}", D8, NONE),
    &op!(STC, 4, "STC", "(CY) <= 1", CY),
    &NOP,
    &op!(DAD, 10, "DAD SP", "(H)(L) <= (H)(L) + (SP)", CY),
    &op!(LDA, 13, "LDA a16", "(A) <= ({a16})", A16, NONE),
    &op!(DCX, 5, "DCX SP", "(SP) <= (SP) - 1"),
    &op!(INR, 5, "INR A", "(A) <= (A) + 1", ZSPAC),
    &op!(DCR, 5, "DCR A", "(A) <= (A) - 1", ZSPAC),
    &op!(MVI, 7, "MVI A, d8", "(A) <= {d8}", D8, NONE),
    &op!(CMC, 4, "CMC", "(CY) <= !(CY)", CY),
    // 0x40
    &op!(MOV, 5, "MOV B, B", "(B) <= (B)"),
    &op!(MOV, 5, "MOV B, C", "(B) <= (C)"),
    &op!(MOV, 5, "MOV B, D", "(B) <= (D)"),
    &op!(MOV, 5, "MOV B, E", "(B) <= (E)"),
    &op!(MOV, 5, "MOV B, H", "(B) <= (H)"),
    &op!(MOV, 5, "MOV B, L", "(B) <= (L)"),
    &op!(MOV, 7, "MOV B, M", "(B) <= ((H)(L))"),
    &op!(MOV, 5, "MOV B, A", "(B) <= (A)"),
    &op!(MOV, 5, "MOV C, B", "(C) <= (B)"),
    &op!(MOV, 5, "MOV C, C", "(C) <= (C)"),
    &op!(MOV, 5, "MOV C, D", "(C) <= (D)"),
    &op!(MOV, 5, "MOV C, E", "(C) <= (E)"),
    &op!(MOV, 5, "MOV C, H", "(C) <= (H)"),
    &op!(MOV, 5, "MOV C, L", "(C) <= (L)"),
    &op!(MOV, 7, "MOV C, M", "(C) <= ((H)(L))"),
    &op!(MOV, 5, "MOV C, A", "(C) <= (A)"),
    // 0x50
    &op!(MOV, 5, "MOV D, B", "(D) <= (B)"),
    &op!(MOV, 5, "MOV D, C", "(D) <= (C)"),
    &op!(MOV, 5, "MOV D, D", "(D) <= (D)"),
    &op!(MOV, 5, "MOV D, E", "(D) <= (E)"),
    &op!(MOV, 5, "MOV D, H", "(D) <= (H)"),
    &op!(MOV, 5, "MOV D, L", "(D) <= (L)"),
    &op!(MOV, 7, "MOV D, M", "(D) <= ((H)(L))"),
    &op!(MOV, 5, "MOV D, A", "(D) <= (A)"),
    &op!(MOV, 5, "MOV E, B", "(E) <= (B)"),
    &op!(MOV, 5, "MOV E, C", "(E) <= (C)"),
    &op!(MOV, 5, "MOV E, D", "(E) <= (D)"),
    &op!(MOV, 5, "MOV E, E", "(E) <= (E)"),
    &op!(MOV, 5, "MOV E, H", "(E) <= (H)"),
    &op!(MOV, 5, "MOV E, L", "(E) <= (L)"),
    &op!(MOV, 7, "MOV E, M", "(E) <= ((H)(L))"),
    &op!(MOV, 5, "MOV E, A", "(E) <= (A)"),
    // 0x60
    &op!(MOV, 5, "MOV H, B", "(H) <= (B)"),
    &op!(MOV, 5, "MOV H, C", "(H) <= (C)"),
    &op!(MOV, 5, "MOV H, D", "(H) <= (D)"),
    &op!(MOV, 5, "MOV H, E", "(H) <= (E)"),
    &op!(MOV, 5, "MOV H, H", "(H) <= (H)"),
    &op!(MOV, 5, "MOV H, L", "(H) <= (L)"),
    &op!(MOV, 7, "MOV H, M", "(H) <= ((H)(L))"),
    &op!(MOV, 5, "MOV H, A", "(H) <= (A)"),
    &op!(MOV, 5, "MOV L, B", "(L) <= (B)"),
    &op!(MOV, 5, "MOV L, C", "(L) <= (C)"),
    &op!(MOV, 5, "MOV L, D", "(L) <= (D)"),
    &op!(MOV, 5, "MOV L, E", "(L) <= (E)"),
    &op!(MOV, 5, "MOV L, H", "(L) <= (H)"),
    &op!(MOV, 5, "MOV L, L", "(L) <= (L)"),
    &op!(MOV, 7, "MOV L, M", "(L) <= ((H)(L))"),
    &op!(MOV, 5, "MOV L, A", "(L) <= (A)"),
    // 0x70
    &op!(MOV, 7, "MOV M, B", "((H)(L)) <= (B)"),
    &op!(MOV, 7, "MOV M, C", "((H)(L)) <= (C)"),
    &op!(MOV, 7, "MOV M, D", "((H)(L)) <= (D)"),
    &op!(MOV, 7, "MOV M, E", "((H)(L)) <= (E)"),
    &op!(MOV, 7, "MOV M, H", "((H)(L)) <= (H)"),
    &op!(MOV, 7, "MOV M, L", "((H)(L)) <= (L)"),
    &op!(HLT, 7, "HLT", "Halt"),
    &op!(MOV, 7, "MOV M, A", "((H)(L)) <= (A)"),
    &op!(MOV, 5, "MOV A, B", "(A) <= (B)"),
    &op!(MOV, 5, "MOV A, C", "(A) <= (C)"),
    &op!(MOV, 5, "MOV A, D", "(A) <= (D)"),
    &op!(MOV, 5, "MOV A, E", "(A) <= (E)"),
    &op!(MOV, 5, "MOV A, H", "(A) <= (H)"),
    &op!(MOV, 5, "MOV A, L", "(A) <= (L)"),
    &op!(MOV, 7, "MOV A, M", "(A) <= ((H)(L))"),
    &op!(MOV, 5, "MOV A, A", "(A) <= (A)"),
    // 0x80
    &op!(ADD, 4, "ADD B", "(A) <= (A) + (B)", ALL),
    &op!(ADD, 4, "ADD C", "(A) <= (A) + (C)", ALL),
    &op!(ADD, 4, "ADD D", "(A) <= (A) + (D)", ALL),
    &op!(ADD, 4, "ADD E", "(A) <= (A) + (E)", ALL),
    &op!(ADD, 4, "ADD H", "(A) <= (A) + (H)", ALL),
    &op!(ADD, 4, "ADD L", "(A) <= (A) + (L)", ALL),
    &op!(ADD, 7, "ADD M", "(A) <= (A) + ((H)(L))", ALL),
    &op!(ADD, 4, "ADD A", "(A) <= (A) + (A)", ALL),
    &op!(ADC, 4, "ADC B", "(A) <= (A) + (B) + (CY)", ALL),
    &op!(ADC, 4, "ADC C", "(A) <= (A) + (C) + (CY)", ALL),
    &op!(ADC, 4, "ADC D", "(A) <= (A) + (D) + (CY)", ALL),
    &op!(ADC, 4, "ADC E", "(A) <= (A) + (E) + (CY)", ALL),
    &op!(ADC, 4, "ADC H", "(A) <= (A) + (H) + (CY)", ALL),
    &op!(ADC, 4, "ADC L", "(A) <= (A) + (L) + (CY)", ALL),
    &op!(ADC, 7, "ADC M", "(A) <= (A) + ((H)(L)) + (CY)", ALL),
    &op!(ADC, 4, "ADC A", "(A) <= (A) + (A) + (CY)", ALL),
    // 0x90
    &op!(SUB, 4, "SUB B", "(A) <= (A) - (B)", ALL),
    &op!(SUB, 4, "SUB C", "(A) <= (A) - (C)", ALL),
    &op!(SUB, 4, "SUB D", "(A) <= (A) - (D)", ALL),
    &op!(SUB, 4, "SUB E", "(A) <= (A) - (E)", ALL),
    &op!(SUB, 4, "SUB H", "(A) <= (A) - (H)", ALL),
    &op!(SUB, 4, "SUB L", "(A) <= (A) - (L)", ALL),
    &op!(SUB, 7, "SUB M", "(A) <= (A) - ((H)(L))", ALL),
    &op!(SUB, 4, "SUB A", "(A) <= (A) - (A)", ALL),
    &op!(SBB, 4, "SBB B", "(A) <= (A) - (B) - (CY)", ALL),
    &op!(SBB, 4, "SBB C", "(A) <= (A) - (C) - (CY)", ALL),
    &op!(SBB, 4, "SBB D", "(A) <= (A) - (D) - (CY)", ALL),
    &op!(SBB, 4, "SBB E", "(A) <= (A) - (E) - (CY)", ALL),
    &op!(SBB, 4, "SBB H", "(A) <= (A) - (H) - (CY)", ALL),
    &op!(SBB, 4, "SBB L", "(A) <= (A) - (L) - (CY)", ALL),
    &op!(SBB, 7, "SBB M", "(A) <= (A) - ((H)(L)) - (CY)", ALL),
    &op!(SBB, 4, "SBB A", "(A) <= (A) - (A) - (CY)", ALL),
    // 0xA0
    &op!(ANA, 4, "ANA B", "(A) <= (A) & (B)", ALL),
    &op!(ANA, 4, "ANA C", "(A) <= (A) & (C)", ALL),
    &op!(ANA, 4, "ANA D", "(A) <= (A) & (D)", ALL),
    &op!(ANA, 4, "ANA E", "(A) <= (A) & (E)", ALL),
    &op!(ANA, 4, "ANA H", "(A) <= (A) & (H)", ALL),
    &op!(ANA, 4, "ANA L", "(A) <= (A) & (L)", ALL),
    &op!(ANA, 7, "ANA M", "(A) <= (A) & ((H)(L))", ALL),
    &op!(ANA, 4, "ANA A", "(A) <= (A) & (A)", ALL),
    &op!(XRA, 4, "XRA B", "(A) <= (A) ^ (B)", ALL),
    &op!(XRA, 4, "XRA C", "(A) <= (A) ^ (C)", ALL),
    &op!(XRA, 4, "XRA D", "(A) <= (A) ^ (D)", ALL),
    &op!(XRA, 4, "XRA E", "(A) <= (A) ^ (E)", ALL),
    &op!(XRA, 4, "XRA H", "(A) <= (A) ^ (H)", ALL),
    &op!(XRA, 4, "XRA L", "(A) <= (A) ^ (L)", ALL),
    &op!(XRA, 7, "XRA M", "(A) <= (A) ^ ((H)(L))", ALL),
    &op!(XRA, 4, "XRA A", "(A) <= (A) ^ (A)", ALL),
    // 0xB0
    &op!(ORA, 4, "ORA B", "(A) <= (A) | (B)", ALL),
    &op!(ORA, 4, "ORA C", "(A) <= (A) | (C)", ALL),
    &op!(ORA, 4, "ORA D", "(A) <= (A) | (D)", ALL),
    &op!(ORA, 4, "ORA E", "(A) <= (A) | (E)", ALL),
    &op!(ORA, 4, "ORA H", "(A) <= (A) | (H)", ALL),
    &op!(ORA, 4, "ORA L", "(A) <= (A) | (L)", ALL),
    &op!(ORA, 7, "ORA M", "(A) <= (A) | ((H)(L))", ALL),
    &op!(ORA, 4, "ORA A", "(A) <= (A) | (A)", ALL),
    &op!(CMP, 4, "CMP B", "(A) - (B)", ALL),
    &op!(CMP, 4, "CMP C", "(A) - (C)", ALL),
    &op!(CMP, 4, "CMP D", "(A) - (D)", ALL),
    &op!(CMP, 4, "CMP E", "(A) - (E)", ALL),
    &op!(CMP, 4, "CMP H", "(A) - (H)", ALL),
    &op!(CMP, 4, "CMP L", "(A) - (L)", ALL),
    &op!(CMP, 7, "CMP M", "(A) - ((H)(L))", ALL),
    &op!(CMP, 4, "CMP A", "(A) - (A)", ALL),
    // 0xC0
    &op!(RNZ, 5 / 11, "RNZ", "If (NZ): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(POP, 10, "POP B", "(C) <= ((SP)), (B) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(JNZ, 10, "JNZ a16", "If (NZ): (PC) <= {a16}", A16, NONE),
    &JMP,
    &op!(CNZ, 11 / 17, "CNZ a16", "If (NZ): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &op!(PUSH, 11, "PUSH B", "((SP) - 1) <= (B), ((SP) - 2) <= (C), (SP) <= (SP) - 2"),
    &op!(ADI, 7, "ADI d8", "(A) <= (A) + {d8}", D8, ALL),
    &op!(RST, 11, "RST 0", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0000"),
    &op!(RZ, 5 / 11, "RZ", "If (Z): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &RET,
    &op!(JZ, 10, "JZ a16", "If (Z): (PC) <= {a16}", A16, NONE),
    &JMP,
    &op!(CZ, 11 / 17, "CZ a16", "If (Z): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &CALL,
    &op!(ACI, 7, "ACI d8", "(A) <= (A) + {d8} + (CY)", D8, ALL),
    &op!(RST, 11, "RST 1", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0008"),
    // 0xD0
    &op!(RNC, 5 / 11, "RNC", "If (NC): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(POP, 10, "POP D", "(E) <= ((SP)), (D) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(JNC, 10, "JNC a16", "If (NC): (PC) <= {a16}", A16, NONE),
    &op!(OUT, 10, "OUT port", "(Port {port}) <= (A)", Port, NONE),
    &op!(CNC, 11 / 17, "CNC a16", "If (NC): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &op!(PUSH, 11, "PUSH D", "((SP) - 1) <= (D), ((SP) - 2) <= (E), (SP) <= (SP) - 2"),
    &op!(SUI, 7, "SUI d8", "(A) <= (A) - {d8}", D8, ALL),
    &op!(RST, 11, "RST 2", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0010"),
    &op!(RC, 5 / 11, "RC", "If (C): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &RET,
    &op!(JC, 10, "JC a16", "If (C): (PC) <= {a16}", A16, NONE),
    &op!(IN, 10, "IN port", "(A) <= (Port {port})", Port, NONE),
    &op!(CC, 11 / 17, "CC a16", "If (C): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &CALL,
    &op!(SBI, 7, "SBI d8", "(A) <= (A) - {d8} - (CY)", D8, ALL),
    &op!(RST, 11, "RST 3", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0018"),
    // 0xE0
    &op!(RPO, 5 / 11, "RPO", "If (PO): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(POP, 10, "POP H", "(L) <= ((SP)), (H) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(JPO, 10, "JPO a16", "If (PO): (PC) <= {a16}", A16, NONE),
    &op!(XTHL, 18, "XTHL", "(L) <=> ((SP)), (H) <=> ((SP) + 1)"),
    &op!(CPO, 11 / 17, "CPO a16", "If (PO): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &op!(PUSH, 11, "PUSH H", "((SP) - 1) <= (H), ((SP) - 2) <= (L), (SP) <= (SP) - 2"),
    &op!(ANI, 7, "ANI d8", "(A) <= (A) & {d8}", D8, ALL),
    &op!(RST, 11, "RST 4", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0020"),
    &op!(RPE, 5 / 11, "RPE", "If (PE): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(PCHL, 5, "PCHL", "(PCH) <= (H), (PCL) <= (L)"),
    &op!(JPE, 10, "JPE a16", "If (PE): (PC) <= {a16}", A16, NONE),
    &op!(XCHG, 4, "XCHG", "(H) <=> (D), (L) <=> (E)"),
    &op!(CPE, 11 / 17, "CPE a16", "If (PE): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &CALL,
    &op!(XRI, 7, "XRI d8", "(A) <= (A) ^ {d8}", D8, ALL),
    &op!(RST, 11, "RST 5", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0028"),
    // 0xF0
    &op!(RP, 5 / 11, "RP", "If (P): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(POP, 10, "POP PSW", "(FLAGS) <= ((SP)), (A) <= ((SP) + 1), (SP) <= (SP) + 2", ALL),
    &op!(JP, 10, "JP a16", "If (P): (PC) <= {a16}", A16, NONE),
    &op!(DI, 4, "DI", "Disable interrupts"),
    &op!(CP, 11 / 17, "CP a16", "If (P): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &op!(PUSH, 11, "PUSH PSW", "((SP) - 1) <= (A), ((SP) - 2) <= (FLAGS), (SP) <= (SP) - 2"),
    &op!(ORI, 7, "ORI d8", "(A) <= (A) | {d8}", D8, ALL),
    &op!(RST, 11, "RST 6", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0030"),
    &op!(RM, 5 / 11, "RM", "If (M): (PCL) <= ((SP)), (PCH) <= ((SP) + 1), (SP) <= (SP) + 2"),
    &op!(SPHL, 5, "SPHL", "(SP) <= (H)(L)"),
    &op!(JM, 10, "JM a16", "If (M): (PC) <= {a16}", A16, NONE),
    &op!(EI, 4, "EI", "Enable interrupts"),
    &op!(CM, 11 / 17, "CM a16", "If (M): ((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= {a16}", A16, NONE),
    &CALL,
    &op!(CPI, 7, "CPI d8", "(A) - {d8}", D8, ALL),
    &op!(RST, 11, "RST 7", "((SP) - 1) <= (PCH), ((SP) - 2) <= (PCL), (SP) <= (SP) - 2, (PC) <= $0038"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn canonical(opcode: u8) -> &'static Descriptor {
        match opcode {
            0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => &NOP,
            0xCB => &JMP,
            0xD9 => &RET,
            0xDD | 0xED | 0xFD => &CALL,
            _ => unreachable!(),
        }
    }

    #[test]
    fn aliases_share_one_record() {
        for &opcode in UNDOCUMENTED.iter() {
            assert!(ptr::eq(canonical(opcode), OPCODES[opcode as usize]));
        }
        assert!(ptr::eq(&NOP, OPCODES[0x00]));
        assert!(ptr::eq(&JMP, OPCODES[0xC3]));
        assert!(ptr::eq(&CALL, OPCODES[0xCD]));
        assert!(ptr::eq(&RET, OPCODES[0xC9]));
    }

    #[test]
    fn no_unknown_rows() {
        assert!(OPCODES.iter().all(|d| !d.is_unknown()));
        assert!(UNKNOWN.is_unknown());
        assert_eq!(1, UNKNOWN.length);
    }

    #[test]
    fn lookup_documented_only() {
        for opcode in 0..=255u8 {
            let d = lookup(opcode, false);
            assert_eq!(is_undocumented(opcode), d.is_unknown(), "{:02X}", opcode);
            assert!(ptr::eq(OPCODES[opcode as usize], lookup(opcode, true)));
        }
    }

    #[test]
    fn mnemonic_starts_with_family() {
        for (opcode, d) in OPCODES.iter().enumerate() {
            assert!(
                d.mnemonic.starts_with(d.family.as_ref()),
                "{:02X} {} {}",
                opcode,
                d.mnemonic,
                d.family
            );
        }
    }

    #[test]
    fn lengths_match_operands() {
        for (opcode, d) in OPCODES.iter().enumerate() {
            assert_eq!(1 + d.operand.size(), d.length, "{:02X}", opcode);
            let has_placeholder = d.mnemonic.ends_with("d8")
                || d.mnemonic.ends_with("d16")
                || d.mnemonic.ends_with("a16")
                || d.mnemonic.ends_with("port");
            assert_eq!(d.length > 1, has_placeholder, "{:02X} {}", opcode, d.mnemonic);
        }
    }

    #[test]
    fn mov_block() {
        const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
        for opcode in 0x40..=0x7Fusize {
            let d = OPCODES[opcode];
            if opcode == 0x76 {
                assert_eq!(Mnemonic::HLT, d.family);
                continue;
            }
            let dst = REGS[(opcode >> 3) & 0b111];
            let src = REGS[opcode & 0b111];
            assert_eq!(format!("MOV {}, {}", dst, src), d.mnemonic);
            assert_eq!(1, d.length);
            assert!(d.flags.is_empty());
        }
    }

    #[test]
    fn instruction_lengths() {
        let three = [
            0x01, 0x11, 0x21, 0x31, 0x22, 0x2A, 0x32, 0x3A, 0xC2, 0xC3, 0xC4, 0xCA, 0xCB, 0xCC,
            0xCD, 0xD2, 0xD4, 0xDA, 0xDC, 0xDD, 0xE2, 0xE4, 0xEA, 0xEC, 0xED, 0xF2, 0xF4, 0xFA,
            0xFC, 0xFD,
        ];
        let two = [
            0x06, 0x0E, 0x16, 0x1E, 0x26, 0x2E, 0x36, 0x3E, 0xC6, 0xCE, 0xD3, 0xD6, 0xDB, 0xDE,
            0xE6, 0xEE, 0xF6, 0xFE,
        ];
        for opcode in 0..=255u8 {
            let expected = if three.contains(&opcode) {
                3
            } else if two.contains(&opcode) {
                2
            } else {
                1
            };
            assert_eq!(expected, OPCODES[opcode as usize].length, "{:02X}", opcode);
        }
    }

    #[test]
    fn cycle_counts() {
        assert_eq!(Cycles { states: 5, taken: None }, OPCODES[0x41].cycles);
        assert_eq!(Cycles { states: 7, taken: None }, OPCODES[0x7E].cycles);
        assert_eq!(Cycles { states: 7, taken: None }, OPCODES[0x77].cycles);
        assert_eq!(Cycles { states: 10, taken: None }, OPCODES[0x36].cycles);
        assert_eq!(Cycles { states: 4, taken: None }, OPCODES[0x00].cycles);
        assert_eq!(Cycles { states: 18, taken: None }, OPCODES[0xE3].cycles);
        assert_eq!("17", CALL.cycles.to_string());
        assert_eq!("10", RET.cycles.to_string());
        assert_eq!("10", OPCODES[0xC2].cycles.to_string());
        assert_eq!("5/11", OPCODES[0xC0].cycles.to_string());
        assert_eq!("11/17", OPCODES[0xFC].cycles.to_string());
    }

    #[test]
    fn only_conditional_calls_and_returns_vary() {
        for (opcode, d) in OPCODES.iter().enumerate() {
            let varies = d.family.is_conditional() && !d.family.is_jump();
            assert_eq!(varies, d.cycles.taken.is_some(), "{:02X} {}", opcode, d.mnemonic);
            if let Some(taken) = d.cycles.taken {
                assert_eq!(6, taken - d.cycles.states, "{:02X}", opcode);
            }
            assert!((4..=18).contains(&d.cycles.states), "{:02X}", opcode);
        }
    }
}
