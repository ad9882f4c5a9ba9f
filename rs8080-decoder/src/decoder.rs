use crate::config::DecoderConfig;
use crate::table::{self, Descriptor};
use crate::{render_operation, DecodeError, Mnemonic, Operand};
use std::fmt::{self, Formatter};

/// One instruction read from the byte stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Origin plus offset into the buffer
    pub address: usize,
    pub opcode: u8,
    /// Opcode followed by its operand bytes
    pub bytes: Vec<u8>,
    pub descriptor: &'static Descriptor,
    pub operand: Option<Operand>,
    /// Operation text with operands substituted
    pub operation: String,
}

impl DecodedInstruction {
    pub fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }

    pub fn family(&self) -> Mnemonic {
        self.descriptor.family
    }

    /// Bytes taken by the instruction, opcode included
    pub fn length(&self) -> usize {
        self.descriptor.length as usize
    }

    pub fn is_unknown(&self) -> bool {
        self.descriptor.is_unknown()
    }

    /// Where a jump, call or restart goes. `None` for returns and `PCHL`,
    /// their target is only known at run time.
    pub fn target(&self) -> Option<u16> {
        let family = self.family();
        if family.is_restart() {
            return Some((self.opcode & 0b0011_1000) as u16);
        }
        match self.operand {
            Some(Operand::Addr(w)) if family.is_jump() || family.is_call() => Some(w.into()),
            _ => None,
        }
    }
}

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.mnemonic(), self.operation)
    }
}

/// Stateless opcode decoder.
///
/// Holds only read-only settings, so one instance can be shared between
/// threads and reused for any number of buffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Decoder {
    /// Decode the undocumented aliases of NOP, JMP, CALL and RET
    pub undocumented: bool,
    /// Address of `buffer[0]`
    pub origin: u16,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            undocumented: true,
            origin: 0,
        }
    }
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Decoder {
            undocumented: config.undocumented,
            origin: config.origin,
        }
    }

    /// Decodes the instruction starting at `buffer[offset]`.
    ///
    /// Returns the instruction and how many bytes it takes. An unrecognized
    /// opcode is not an error, it decodes to a one byte instruction for
    /// which [`DecodedInstruction::is_unknown`] holds.
    pub fn decode(
        &self,
        buffer: &[u8],
        offset: usize,
    ) -> Result<(DecodedInstruction, usize), DecodeError> {
        let opcode = *buffer.get(offset).ok_or(DecodeError::OutOfRange {
            offset,
            len: buffer.len(),
        })?;
        let address = self.origin as usize + offset;
        let descriptor = table::lookup(opcode, self.undocumented);
        let length = descriptor.length as usize;

        let bytes = match buffer.get(offset..offset + length) {
            Some(bytes) => bytes,
            None => {
                return Err(DecodeError::TruncatedInstruction {
                    opcode,
                    address,
                    expected: descriptor.length,
                    available: buffer[offset..].to_vec(),
                })
            }
        };
        let operand = descriptor.operand.read(&bytes[1..]);
        let operation = render_operation(descriptor.operation, opcode, operand);
        log::trace!("{:04X}: {:02X} {}", address, opcode, descriptor.mnemonic);

        let insn = DecodedInstruction {
            address,
            opcode,
            bytes: bytes.to_vec(),
            descriptor,
            operand,
            operation,
        };
        Ok((insn, length))
    }

    pub fn iter<'a>(&self, buffer: &'a [u8]) -> Instructions<'a> {
        Instructions {
            decoder: *self,
            buffer,
            offset: 0,
            done: false,
        }
    }
}

/// Decodes with the default [`Decoder`]
pub fn decode(buffer: &[u8], offset: usize) -> Result<(DecodedInstruction, usize), DecodeError> {
    Decoder::default().decode(buffer, offset)
}

/// Walks a buffer one instruction at a time, stopping after the first error
pub struct Instructions<'a> {
    decoder: Decoder,
    buffer: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> Instructions<'a> {
    /// Offset of the next instruction
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<DecodedInstruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.buffer.len() {
            return None;
        }
        match self.decoder.decode(self.buffer, self.offset) {
            Ok((insn, size)) => {
                if insn.is_unknown() {
                    log::debug!("unknown opcode {:02X} at {:04X}", insn.opcode, insn.address);
                }
                self.offset += size;
                Some(Ok(insn))
            }
            Err(e) => {
                log::warn!("{}", e);
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
