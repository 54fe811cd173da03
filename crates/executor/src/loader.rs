//! Program loading.
//!
//! Program text is a bare sequence of printable characters: code points
//! 33..=126 once whitespace is stripped, no header, no length prefix. The
//! text occupies cells [0, L); every remaining cell is generated by the
//! crazy recurrence over the two preceding cells, so a freshly loaded
//! memory is a pure function of the program text.

use trivm_primitives::{crazy, Tryte};

use crate::decode::{CODE_POINT_MAX, CODE_POINT_MIN};
use crate::error::{ExecutorError, Result};
use crate::memory::{Memory, MEMORY_SIZE};

/// Validate `text` and load it into `memory`, returning the number of
/// program cells written.
///
/// Validation runs to completion before the first write, so a failed load
/// leaves the memory untouched.
pub fn load_program(memory: &mut Memory, text: &str) -> Result<usize> {
    let code: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();

    if code.len() > MEMORY_SIZE {
        return Err(ExecutorError::ProgramTooLarge {
            len: code.len(),
            limit: MEMORY_SIZE,
        });
    }

    let mut points = Vec::with_capacity(code.len());
    for (pos, &ch) in code.iter().enumerate() {
        let point = ch as u32;
        if !(CODE_POINT_MIN..=CODE_POINT_MAX).contains(&point) {
            return Err(ExecutorError::InvalidCharacter { pos, ch });
        }
        points.push(point);
    }

    // Wrapped writes: the length is already bounds-checked above.
    for (i, &point) in points.iter().enumerate() {
        memory.write_wrapped(i as i64, Tryte::new(point));
    }

    // Lazily initialize the rest of memory: cell[i] = crazy(cell[i-1],
    // cell[i-2]). For short programs the preceding indices go below zero
    // and resolve from the top of memory, matching native semantics.
    for i in points.len()..MEMORY_SIZE {
        let value = crazy(
            memory.read_wrapped(i as i64 - 1),
            memory.read_wrapped(i as i64 - 2),
        );
        memory.write_wrapped(i as i64, value);
    }

    Ok(points.len())
}
