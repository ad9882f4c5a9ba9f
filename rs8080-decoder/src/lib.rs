//! Intel 8080 instruction decoder.
//!
//! [`decode`] turns the bytes at one offset of a buffer into a
//! [`DecodedInstruction`] and tells how far to advance. Lookup goes through
//! [`table::OPCODES`], which has a row for every byte value; turning a row
//! into text is done separately by [`render_operation`] and [`LineFormat`].

mod config;
mod decoder;
mod error;
mod flags;
mod format;
mod mnemonic;
mod operand;
pub mod table;
mod word;

pub use config::{load_config, parse_config, Config, DecoderConfig, OutputConfig};
pub use decoder::{decode, DecodedInstruction, Decoder, Instructions};
pub use error::{ConfigError, DecodeError};
pub use flags::FlagsAffected;
pub use format::{hex_bytes, render_operation, LineFormat};
pub use mnemonic::Mnemonic;
pub use operand::{Operand, OperandKind};
pub use table::{Cycles, Descriptor};
pub use word::Word;
