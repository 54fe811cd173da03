//! End-to-end tests for the trivm virtual machine.
//!
//! This crate exercises the complete pipeline:
//! 1. Assemble a program with the inverse positional cipher
//! 2. Load it (validation + crazy-operator memory fill)
//! 3. Execute it under a fuel bound
//! 4. Inspect output, cycle count, and the execution trace

pub mod encode;
pub mod pipeline;
pub mod programs;
