//! Bounded ternary memory.
//!
//! # Access Modes
//!
//! The memory offers two access modes with deliberately distinct contracts:
//! - **Checked** (`read_checked`/`write_checked`): rejects any address
//!   outside [0, 59049) with an explicit error. Use this wherever an
//!   out-of-range address would be a caller bug.
//! - **Wrapped** (`read_wrapped`/`write_wrapped`): always succeeds by
//!   reducing the address modulo the memory size (Euclidean remainder, so
//!   addresses below zero resolve from the top of memory). This exists
//!   because the machine's own pointer arithmetic wraps by definition, not
//!   as an error-tolerance mechanism.
//!
//! The two modes are kept as separate operations on purpose: one accessor
//! serving both roles would either hide real bugs or break the native
//! wraparound semantics.

use serde::{Deserialize, Serialize};

use trivm_primitives::Tryte;

use crate::error::{ExecutorError, Result};

/// Number of memory cells: 3^10, one cell per possible tryte value.
pub const MEMORY_SIZE: usize = 59_049;

/// The machine's memory: a fixed array of 59,049 tryte cells.
///
/// The length is constant for the machine's entire lifetime and every cell
/// always holds a valid tryte; there is no uninitialized state.
#[derive(Clone, Serialize, Deserialize)]
pub struct Memory {
    cells: Vec<Tryte>,
}

impl Memory {
    /// Create a new memory with all cells zeroed.
    pub fn new() -> Self {
        Self {
            cells: vec![Tryte::ZERO; MEMORY_SIZE],
        }
    }

    /// Read a cell, rejecting out-of-range addresses.
    #[inline]
    pub fn read_checked(&self, addr: u32) -> Result<Tryte> {
        self.cells
            .get(addr as usize)
            .copied()
            .ok_or(ExecutorError::OutOfBounds { addr })
    }

    /// Replace a cell, rejecting out-of-range addresses.
    #[inline]
    pub fn write_checked(&mut self, addr: u32, value: Tryte) -> Result<()> {
        match self.cells.get_mut(addr as usize) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ExecutorError::OutOfBounds { addr }),
        }
    }

    /// Read a cell, reducing the address modulo the memory size.
    #[inline]
    pub fn read_wrapped(&self, addr: i64) -> Tryte {
        self.cells[addr.rem_euclid(MEMORY_SIZE as i64) as usize]
    }

    /// Write a cell, reducing the address modulo the memory size.
    #[inline]
    pub fn write_wrapped(&mut self, addr: i64, value: Tryte) {
        self.cells[addr.rem_euclid(MEMORY_SIZE as i64) as usize] = value;
    }

    /// Get the number of cells.
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
