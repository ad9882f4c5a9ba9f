use crate::{DecodedInstruction, Operand};
use std::fmt::Write;

/// Fills the placeholders of an operation template.
///
/// `{d8}` and `{port}` take byte 2, `{lo}` and `{hi}` take byte 2 and
/// byte 3 separately, `{a16}` takes both as one address, `{op}` is the
/// opcode itself. A placeholder the operand cannot fill is left as is.
pub fn render_operation(template: &str, opcode: u8, operand: Option<Operand>) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = match after.find('}') {
            Some(end) => end,
            None => {
                rest = &rest[start..];
                break;
            }
        };
        let key = &after[..end];
        if !substitute(&mut out, key, opcode, operand) {
            out.push('{');
            out.push_str(key);
            out.push('}');
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

fn substitute(out: &mut String, key: &str, opcode: u8, operand: Option<Operand>) -> bool {
    // writing into a String never fails
    let _ = match (key, operand) {
        ("op", _) => write!(out, "${:02X}", opcode),
        ("d8", Some(Operand::D8(d8))) => write!(out, "#${:02X}", d8),
        ("port", Some(Operand::Port(port))) => write!(out, "${:02X}", port),
        ("lo", Some(Operand::D16(w))) => write!(out, "#${:02X}", w.lo),
        ("hi", Some(Operand::D16(w))) => write!(out, "#${:02X}", w.hi),
        ("a16", Some(op @ Operand::Addr(_))) => write!(out, "{}", op),
        _ => return false,
    };
    true
}

/// Layout of one listing line:
/// `AAAA  BB BB BB  MNEMONIC<TAB>OPERATION`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineFormat {
    /// Print the address column
    pub address: bool,
    /// Print the raw bytes column
    pub bytes: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        LineFormat {
            address: true,
            bytes: true,
        }
    }
}

impl LineFormat {
    pub fn line(&self, insn: &DecodedInstruction) -> String {
        let mut out = String::new();
        if self.address {
            let _ = write!(out, "{:04X}  ", insn.address);
        }
        if self.bytes {
            let _ = write!(out, "{:<10}", hex_bytes(&insn.bytes));
        }
        let _ = write!(out, "{}\t{}", insn.mnemonic(), insn.operation);
        out
    }
}

pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
