//! Canned programs for the trivm test suite.

use trivm_executor::Opcode;

use crate::encode;

/// A program that halts immediately.
///
/// Expected: success, empty output, zero cycles (halt runs before any
/// increment).
pub fn halt_program() -> String {
    encode::assemble(&[Opcode::Halt])
}

/// Output the (zero) accumulator, then halt.
///
/// Expected: output is a single NUL character, one cycle.
pub fn output_then_halt() -> String {
    encode::assemble(&[Opcode::Output, Opcode::Halt])
}

/// Rotate the cell under the data pointer, output the result, halt.
///
/// Cell 0 holds the rotate instruction's own code point 35, which rotates
/// to 105 (`'i'`). Expected: output `"i"`, two cycles.
pub fn rotate_output_halt() -> String {
    encode::assemble(&[Opcode::Rotate, Opcode::Output, Opcode::Halt])
}

/// Apply the crazy op to cell 0 and the zero accumulator, output, halt.
///
/// crazy(36, 0) = 29524, and 29524 mod 256 = 84 (`'T'`). Expected: output
/// `"T"`, two cycles.
pub fn crazy_output_halt() -> String {
    encode::assemble(&[Opcode::Crazy, Opcode::Output, Opcode::Halt])
}

/// Spin the code pointer between two jump instructions forever.
///
/// The jump at address 0 sends c to 34; the cell at 34 decodes to another
/// jump that sends c back to 34. The jump owns its control transfer, so
/// the cycle counter never advances. Expected: fuel exhaustion with zero
/// cycles.
pub fn endless_jump_loop() -> String {
    let mut text: Vec<char> = Vec::new();
    text.push(encode::opcode_at(Opcode::Jump, 0));
    for i in 1..34 {
        text.push(encode::opcode_at(Opcode::Nop, i));
    }
    text.push(encode::opcode_at(Opcode::Jump, 34));
    text.into_iter().collect()
}
