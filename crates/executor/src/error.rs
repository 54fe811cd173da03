//! Executor errors.

use thiserror::Error;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, ExecutorError>;

/// Errors that can occur while loading or executing a program.
///
/// Every failure the machine can produce is one of these variants; nothing
/// in the executor panics for a reachable program state.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Program text holds more non-whitespace characters than memory cells.
    #[error("program too large: {len} cells, memory holds {limit}")]
    ProgramTooLarge { len: usize, limit: usize },

    /// Program text contains a character outside code points 33..=126.
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidCharacter { pos: usize, ch: char },

    /// Checked memory access outside [0, 59049).
    #[error("memory access out of bounds: address {addr}")]
    OutOfBounds { addr: u32 },

    /// A fetched cell holds a value outside the printable range and cannot
    /// be decoded.
    #[error("invalid code point {value} at address {addr}")]
    InvalidCodePoint { addr: u32, value: u32 },

    /// The cell at the code pointer could not be read.
    #[error("failed to fetch instruction at address {addr}")]
    InstructionFetch { addr: u32 },

    /// The fuel limit was reached before the program halted.
    #[error("execution limit exceeded: {executed} cycles executed, limit was {limit} steps")]
    CycleLimitExceeded { executed: u64, limit: u64 },
}
