//! Execution trace for external inspection.
//!
//! Each traced step produces a TraceRow capturing the registers and the
//! decoded opcode. The collected trace gives an external equivalence
//! checker enough to compare a run against an independent simulation;
//! tracing is opt-in and has no effect on machine semantics.

use serde::{Deserialize, Serialize};

use crate::decode::Opcode;

/// A single traced step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    /// Cycle counter before this step.
    pub clk: u64,
    /// Code pointer before this step.
    pub c: u32,
    /// Data pointer before this step.
    pub d: u32,
    /// Decoded opcode.
    pub opcode: Opcode,
    /// Accumulator after this step.
    pub a: u32,
}

impl TraceRow {
    /// Create a new trace row with default opcode and accumulator.
    pub fn new(clk: u64, c: u32, d: u32) -> Self {
        Self {
            clk,
            c,
            d,
            opcode: Opcode::Nop,
            a: 0,
        }
    }
}

/// Complete execution trace.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExecutionTrace {
    /// All trace rows.
    pub rows: Vec<TraceRow>,
    /// Accumulator at the end of the run.
    pub final_a: u32,
    /// Code pointer at the end of the run.
    pub final_c: u32,
    /// Data pointer at the end of the run.
    pub final_d: u32,
    /// Machine cycle counter at the end of the run.
    pub total_cycles: u64,
    /// Whether the machine executed the halt instruction.
    pub halted: bool,
}

impl ExecutionTrace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the trace.
    pub fn push(&mut self, row: TraceRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the trace is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
