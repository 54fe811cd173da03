//! The virtual machine.
//!
//! # Execution Model
//!
//! A standard fetch-decode-execute loop over self-decrypting instructions:
//! the cell at the code pointer is checked-read, decoded positionally
//! (see [`decode`]), and executed. Unless the opcode owns its own control
//! transfer, both pointers then advance by one (wrapping tryte adds) and
//! the cycle counter increments.
//!
//! ## Safety Properties
//!
//! - Registers are trytes, so pointer arithmetic cannot overflow and
//!   addresses cannot leave [0, 59049).
//! - Every fallible operation returns a [`Result`]; no reachable program
//!   state panics.
//! - [`Machine::run`] bounds the number of step invocations, so execution
//!   always terminates even for programs that never halt.
//!
//! Each machine owns its state exclusively; independent machines may run
//! on parallel threads with nothing shared.

use serde::{Deserialize, Serialize};

use trivm_primitives::{crazy, rotate_right, Tryte};

use crate::decode::{decode, Opcode};
use crate::error::{ExecutorError, Result};
use crate::loader;
use crate::memory::Memory;
use crate::trace::{ExecutionTrace, TraceRow};

/// Default fuel for [`Machine::run`]: large but finite.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// What a single step reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The machine is still running.
    Continue,
    /// The machine executed the halt instruction.
    Halted,
}

/// Machine state.
#[derive(Clone, Serialize, Deserialize)]
pub struct Machine {
    /// Accumulator.
    pub a: Tryte,
    /// Code pointer.
    pub c: Tryte,
    /// Data pointer.
    pub d: Tryte,
    /// Memory subsystem.
    pub memory: Memory,
    /// Cycle counter.
    pub cycle: u64,
    /// Output accumulated so far.
    output: String,
    /// Set once the halt instruction executes.
    halted: bool,
    /// Execution trace (if tracing is enabled).
    trace: Option<ExecutionTrace>,
    /// Tracing enabled flag.
    tracing: bool,
}

impl Machine {
    /// Create a new machine with zeroed registers and memory.
    pub fn new() -> Self {
        Self {
            a: Tryte::ZERO,
            c: Tryte::ZERO,
            d: Tryte::ZERO,
            memory: Memory::new(),
            cycle: 0,
            output: String::new(),
            halted: false,
            trace: None,
            tracing: false,
        }
    }

    /// Validate and load a program, resetting all execution state.
    ///
    /// A failed load leaves the previous memory image and registers in
    /// place; nothing is partially applied.
    pub fn load(&mut self, text: &str) -> Result<()> {
        loader::load_program(&mut self.memory, text)?;
        self.a = Tryte::ZERO;
        self.c = Tryte::ZERO;
        self.d = Tryte::ZERO;
        self.cycle = 0;
        self.output.clear();
        self.halted = false;
        Ok(())
    }

    /// Enable execution tracing.
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace = Some(ExecutionTrace::new());
    }

    /// Disable tracing and return the collected trace.
    pub fn take_trace(&mut self) -> Option<ExecutionTrace> {
        self.tracing = false;
        let mut trace = self.trace.take()?;
        trace.final_a = self.a.value();
        trace.final_c = self.c.value();
        trace.final_d = self.d.value();
        trace.total_cycles = self.cycle;
        trace.halted = self.halted;
        Some(trace)
    }

    /// The output accumulated so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Whether the machine has executed the halt instruction.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Execute a single instruction.
    ///
    /// Reports [`StepOutcome::Continue`], [`StepOutcome::Halted`], or a
    /// fatal error (failed fetch or undecodable cell) that aborts the run.
    /// Operand read failures inside an opcode are a defined degrade: the
    /// update is skipped and execution continues.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        // Fetch.
        let c_addr = self.c.value();
        let instr = self
            .memory
            .read_checked(c_addr)
            .map_err(|_| ExecutorError::InstructionFetch { addr: c_addr })?;

        // Decode.
        let op = decode(instr.value(), c_addr)?;

        let mut row = TraceRow::new(self.cycle, c_addr, self.d.value());
        row.opcode = op;

        // Execute.
        match op {
            Opcode::MovData => {
                if let Ok(cell) = self.memory.read_checked(self.d.value()) {
                    self.d = cell;
                }
            }
            Opcode::Jump => {
                if let Ok(cell) = self.memory.read_checked(self.d.value()) {
                    // This opcode owns its control transfer: no trailing
                    // increment of either pointer or the cycle counter.
                    self.c = cell;
                    row.a = self.a.value();
                    self.record(row);
                    return Ok(StepOutcome::Continue);
                }
            }
            Opcode::Rotate => {
                let d_addr = self.d.value();
                if let Ok(cell) = self.memory.read_checked(d_addr) {
                    let rotated = rotate_right(cell);
                    self.memory.write_wrapped(d_addr as i64, rotated);
                    self.a = rotated;
                }
            }
            Opcode::Crazy => {
                let d_addr = self.d.value();
                if let Ok(cell) = self.memory.read_checked(d_addr) {
                    let result = crazy(cell, self.a);
                    self.memory.write_wrapped(d_addr as i64, result);
                    self.a = result;
                }
            }
            Opcode::Output => {
                let byte = (self.a.value() % 256) as u8;
                self.output.push(byte as char);
            }
            Opcode::Input => {
                // Input is not modeled; the opcode is a defined no-op.
            }
            Opcode::Halt => {
                self.halted = true;
                row.a = self.a.value();
                self.record(row);
                return Ok(StepOutcome::Halted);
            }
            Opcode::Nop => {}
        }

        // Trailing increment: wrapping tryte adds.
        self.c += Tryte::ONE;
        self.d += Tryte::ONE;
        self.cycle += 1;

        row.a = self.a.value();
        self.record(row);
        Ok(StepOutcome::Continue)
    }

    /// Run until halt, a fatal step error, or `max_steps` step invocations.
    ///
    /// Returns the output string only if the machine halted within the
    /// bound. Reaching the bound first is reported as a distinct
    /// [`ExecutorError::CycleLimitExceeded`]; the partial output stays
    /// available through [`Machine::output`]. Fatal step errors propagate
    /// verbatim.
    pub fn run(&mut self, max_steps: u64) -> Result<String> {
        for _ in 0..max_steps {
            match self.step()? {
                StepOutcome::Continue => {}
                StepOutcome::Halted => return Ok(self.output.clone()),
            }
        }
        Err(ExecutorError::CycleLimitExceeded {
            executed: self.cycle,
            limit: max_steps,
        })
    }

    fn record(&mut self, row: TraceRow) {
        if self.tracing {
            if let Some(trace) = &mut self.trace {
                trace.push(row);
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
