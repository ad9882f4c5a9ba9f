use std::fmt::{self, Display, Formatter};

/// Condition flags an instruction may change.
///
/// Only used to document the instruction; nothing here is computed
/// from the decoded bytes.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FlagsAffected {
    /// Zero flag
    pub z: bool,
    /// Sign flag
    pub s: bool,
    /// Parity flag
    pub p: bool,
    /// Carry flag
    pub cy: bool,
    /// Auxiliary carry
    pub ac: bool,
}

impl FlagsAffected {
    pub const NONE: FlagsAffected = FlagsAffected {
        z: false,
        s: false,
        p: false,
        cy: false,
        ac: false,
    };

    pub const ALL: FlagsAffected = FlagsAffected {
        z: true,
        s: true,
        p: true,
        cy: true,
        ac: true,
    };

    /// INR and DCR leave carry alone
    pub const ZSPAC: FlagsAffected = FlagsAffected {
        cy: false,
        ..FlagsAffected::ALL
    };

    pub const CY: FlagsAffected = FlagsAffected {
        cy: true,
        ..FlagsAffected::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == FlagsAffected::NONE
    }
}

impl Display for FlagsAffected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        macro_rules! flagify {
            ($name:ident) => {
                if self.$name {
                    stringify!($name)
                } else {
                    "."
                }
            };
        }
        write!(
            f,
            "{}{}{}{}{}",
            flagify!(z),
            flagify!(s),
            flagify!(p),
            if self.cy { "c" } else { "." },
            if self.ac { "a" } else { "." },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::FlagsAffected;

    #[test]
    fn display() {
        assert_eq!("zspca", FlagsAffected::ALL.to_string());
        assert_eq!(".....", FlagsAffected::NONE.to_string());
        assert_eq!("zsp.a", FlagsAffected::ZSPAC.to_string());
        assert_eq!("...c.", FlagsAffected::CY.to_string());
    }

    #[test]
    fn empty() {
        assert!(FlagsAffected::NONE.is_empty());
        assert!(FlagsAffected::default().is_empty());
        assert!(!FlagsAffected::CY.is_empty());
    }
}
