use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};
use Mnemonic::*;

/// Instruction name without operands
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr, Display, EnumIter)]
pub enum Mnemonic {
    // Data transfer
    MOV,
    MVI,
    LXI,
    LDA,
    STA,
    LHLD,
    SHLD,
    LDAX,
    STAX,
    XCHG,

    // Arithmetic
    ADD,
    ADI,
    ADC,
    ACI,
    SUB,
    SUI,
    SBB,
    SBI,
    INR,
    DCR,
    INX,
    DCX,
    DAD,
    DAA,

    // Logical
    ANA,
    ANI,
    XRA,
    XRI,
    ORA,
    ORI,
    CMP,
    CPI,
    RLC,
    RRC,
    RAL,
    RAR,
    CMA,
    CMC,
    STC,

    // Branch
    JMP,
    JNZ,
    JZ,
    JNC,
    JC,
    JPO,
    JPE,
    JP,
    JM,
    CALL,
    CNZ,
    CZ,
    CNC,
    CC,
    CPO,
    CPE,
    CP,
    CM,
    RET,
    RNZ,
    RZ,
    RNC,
    RC,
    RPO,
    RPE,
    RP,
    RM,
    RST,
    PCHL,

    // Stack, I/O and machine control
    PUSH,
    POP,
    XTHL,
    SPHL,
    IN,
    OUT,
    EI,
    DI,
    HLT,
    NOP,

    #[strum(serialize = "???")]
    Unknown,
}

impl Mnemonic {
    pub fn is_jump(self) -> bool {
        matches!(self, JMP | JNZ | JZ | JNC | JC | JPO | JPE | JP | JM)
    }

    pub fn is_call(self) -> bool {
        matches!(self, CALL | CNZ | CZ | CNC | CC | CPO | CPE | CP | CM)
    }

    pub fn is_return(self) -> bool {
        matches!(self, RET | RNZ | RZ | RNC | RC | RPO | RPE | RP | RM)
    }

    pub fn is_restart(self) -> bool {
        self == RST
    }

    /// Jumps, calls and returns that depend on a condition flag
    pub fn is_conditional(self) -> bool {
        (self.is_jump() && self != JMP)
            || (self.is_call() && self != CALL)
            || (self.is_return() && self != RET)
    }

    /// Anything that may load PC with something other than PC + length
    pub fn transfers_control(self) -> bool {
        self.is_jump() || self.is_call() || self.is_return() || self.is_restart() || self == PCHL
    }
}
