//! trivm-executor: Deterministic self-decrypting ternary virtual machine.
//!
//! This crate provides:
//! - A bounded 59,049-cell ternary memory with checked and wrapped access
//! - The positional instruction decoder
//! - A program-text loader with crazy-operator memory fill
//! - The machine itself: step-wise execution and a fuel-bounded run loop
//! - Optional execution tracing for external equivalence checking

pub mod decode;
pub mod error;
pub mod loader;
pub mod machine;
pub mod memory;
pub mod trace;

pub use decode::{decode, Opcode};
pub use error::ExecutorError;
pub use loader::load_program;
pub use machine::{Machine, StepOutcome, DEFAULT_MAX_STEPS};
pub use memory::{Memory, MEMORY_SIZE};
pub use trace::{ExecutionTrace, TraceRow};
