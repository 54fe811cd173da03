//! Positional instruction decryption.
//!
//! A stored cell does not decode to a fixed operation: the effective opcode
//! depends on both the cell's value and the address it was fetched from,
//! via `(value - 33 + position) mod 94`. The same byte therefore means
//! different operations at different addresses, and a cell rewritten by the
//! program changes meaning the next time it is fetched.

use serde::{Deserialize, Serialize};

use crate::error::{ExecutorError, Result};

/// Lowest code point a program cell may hold ('!').
pub const CODE_POINT_MIN: u32 = 33;

/// Highest code point a program cell may hold ('~').
pub const CODE_POINT_MAX: u32 = 126;

/// Modulus of the positional cipher: the width of the printable range.
pub const CIPHER_MODULUS: u32 = 94;

/// The machine's eight operations.
///
/// A closed set: new opcodes never appear at runtime, so the step function
/// consumes this with a single exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    /// `j`: data pointer <- memory[data pointer].
    MovData,
    /// `i`: code pointer <- memory[data pointer]; owns its own control
    /// transfer, so the trailing pointer increment is skipped.
    Jump,
    /// `*`: rotate memory[data pointer] right one trit; accumulator takes
    /// the result.
    Rotate,
    /// `p`: memory[data pointer] <- crazy(memory[data pointer], accumulator);
    /// accumulator takes the result.
    Crazy,
    /// `<`: append accumulator mod 256 to the output.
    Output,
    /// `/`: read one input character. A defined no-op in this machine.
    Input,
    /// `v`: stop execution.
    Halt,
    /// `o`: do nothing.
    Nop,
}

/// Cipher indices 0..8 map to opcodes in this order; any larger index is
/// the machine's native "do nothing".
const OPCODE_TABLE: [Opcode; 8] = [
    Opcode::MovData,
    Opcode::Jump,
    Opcode::Rotate,
    Opcode::Crazy,
    Opcode::Output,
    Opcode::Input,
    Opcode::Halt,
    Opcode::Nop,
];

impl Opcode {
    /// The conventional single-character mnemonic.
    pub const fn mnemonic(self) -> char {
        match self {
            Opcode::MovData => 'j',
            Opcode::Jump => 'i',
            Opcode::Rotate => '*',
            Opcode::Crazy => 'p',
            Opcode::Output => '<',
            Opcode::Input => '/',
            Opcode::Halt => 'v',
            Opcode::Nop => 'o',
        }
    }

    /// This opcode's index in the decode table.
    pub const fn cipher_index(self) -> u32 {
        match self {
            Opcode::MovData => 0,
            Opcode::Jump => 1,
            Opcode::Rotate => 2,
            Opcode::Crazy => 3,
            Opcode::Output => 4,
            Opcode::Input => 5,
            Opcode::Halt => 6,
            Opcode::Nop => 7,
        }
    }
}

/// Decode the cell value stored at `position`.
///
/// A value outside the printable range 33..=126 is an input-validation
/// error, never coerced. A cipher index past the opcode table is itself a
/// no-op, not a failure.
pub fn decode(value: u32, position: u32) -> Result<Opcode> {
    if !(CODE_POINT_MIN..=CODE_POINT_MAX).contains(&value) {
        return Err(ExecutorError::InvalidCodePoint {
            addr: position,
            value,
        });
    }
    let index = (value - CODE_POINT_MIN + position) % CIPHER_MODULUS;
    match OPCODE_TABLE.get(index as usize) {
        Some(&op) => Ok(op),
        None => Ok(Opcode::Nop),
    }
}
