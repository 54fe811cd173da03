//! Program-text encoders for test programs.
//!
//! The machine's cipher is positional: a cell's opcode is
//! `(value - 33 + position) mod 94`. These helpers invert that, producing
//! the character that decodes to a wanted opcode at a given address, so
//! tests can hand-assemble programs.

use trivm_executor::decode::{CIPHER_MODULUS, CODE_POINT_MIN};
use trivm_executor::Opcode;

/// The character that decodes to `op` when stored at `position`.
pub fn opcode_at(op: Opcode, position: u32) -> char {
    let index = op.cipher_index();
    let shift = position % CIPHER_MODULUS;
    let value = CODE_POINT_MIN + (index + CIPHER_MODULUS - shift) % CIPHER_MODULUS;
    // value is in 33..=126 by construction.
    char::from_u32(value).expect("printable code point")
}

/// Assemble a program that executes `ops` in sequence from address 0.
///
/// Only meaningful for straight-line programs: control transfers land on
/// cells this encoder did not aim at that address.
pub fn assemble(ops: &[Opcode]) -> String {
    ops.iter()
        .enumerate()
        .map(|(i, &op)| opcode_at(op, i as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivm_executor::decode;

    #[test]
    fn test_opcode_at_inverts_decode() {
        let all = [
            Opcode::MovData,
            Opcode::Jump,
            Opcode::Rotate,
            Opcode::Crazy,
            Opcode::Output,
            Opcode::Input,
            Opcode::Halt,
            Opcode::Nop,
        ];
        for &op in &all {
            for position in [0, 1, 7, 93, 94, 95, 59_048] {
                let ch = opcode_at(op, position);
                assert_eq!(decode::decode(ch as u32, position).unwrap(), op);
            }
        }
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(opcode_at(Opcode::Halt, 0), '\'');
        assert_eq!(opcode_at(Opcode::Halt, 1), '&');
        assert_eq!(opcode_at(Opcode::Output, 0), '%');
        assert_eq!(opcode_at(Opcode::Rotate, 0), '#');
    }
}
