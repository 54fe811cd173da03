//! trivm-primitives: Ternary word arithmetic for the trivm virtual machine.
//!
//! This crate provides:
//! - The `Trit` ternary digit
//! - The `Tryte` 10-trit word with wraparound arithmetic
//! - The `crazy` tritwise operator and right trit rotation

pub mod ops;
pub mod trit;
pub mod tryte;

pub use ops::{crazy, crazy_trit, rotate_right};
pub use trit::Trit;
pub use tryte::{Tryte, TRITS_PER_TRYTE, TRYTE_MODULUS};
