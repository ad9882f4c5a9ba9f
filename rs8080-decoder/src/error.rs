use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("offset {offset} is outside of the {len} byte buffer")]
    OutOfRange { offset: usize, len: usize },

    /// The opcode wants more bytes than the buffer has left.
    /// `available` starts with the opcode itself.
    #[error(
        "truncated instruction {opcode:02X} at {address:04X}: needs {expected} bytes, got {}",
        .available.len()
    )]
    TruncatedInstruction {
        opcode: u8,
        address: usize,
        expected: u8,
        available: Vec<u8>,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
