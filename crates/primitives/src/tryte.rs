//! 10-trit word arithmetic.
//!
//! The machine word is a tryte: ten ternary digits, an unsigned integer in
//! [0, 59048]. Construction reduces modulo 3^10 = 59049, so no operation can
//! produce a value outside the range or trip an overflow check. Addition
//! wraps by the same modulus; this is the machine's defined pointer
//! arithmetic, not an error-tolerance policy.

use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::trit::Trit;

/// The number of trits in a tryte.
pub const TRITS_PER_TRYTE: usize = 10;

/// The tryte modulus: 3^10 = 59049.
pub const TRYTE_MODULUS: u32 = 59_049;

/// A 10-trit word.
///
/// Internally stored as a u32 in the range [0, 59049).
/// All operations maintain this invariant.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Tryte(u32);

impl Tryte {
    /// The zero word.
    pub const ZERO: Self = Self(0);

    /// The word with value one.
    pub const ONE: Self = Self(1);

    /// The largest tryte value, 3^10 - 1 = 59048.
    pub const MAX: Self = Self(TRYTE_MODULUS - 1);

    /// Create a new tryte, reducing modulo 3^10 if necessary.
    #[inline]
    pub const fn new(val: u32) -> Self {
        Self(val % TRYTE_MODULUS)
    }

    /// Create from a possibly negative integer, normalizing into [0, 59049).
    ///
    /// Negative inputs take the non-negative residue, so `from_i64(-1)`
    /// is the largest tryte value.
    #[inline]
    pub fn from_i64(val: i64) -> Self {
        Self(val.rem_euclid(TRYTE_MODULUS as i64) as u32)
    }

    /// Get the inner value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Get the inner value (alias for `value`).
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Decompose into ten trits, least significant first.
    ///
    /// Recomposing the result with [`from_trits`](Self::from_trits)
    /// reproduces the original word exactly.
    #[inline]
    pub fn to_trits(self) -> [Trit; TRITS_PER_TRYTE] {
        let mut trits = [Trit::Zero; TRITS_PER_TRYTE];
        let mut n = self.0;
        for trit in trits.iter_mut() {
            *trit = Trit::from_rem(n % 3);
            n /= 3;
        }
        trits
    }

    /// Recompose from ten trits, least significant first.
    #[inline]
    pub fn from_trits(trits: [Trit; TRITS_PER_TRYTE]) -> Self {
        let mut value = 0u32;
        for trit in trits.iter().rev() {
            value = value * 3 + trit.value();
        }
        Self(value)
    }

    /// Check if zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// --- Arithmetic trait implementations ---

impl Add for Tryte {
    type Output = Self;

    /// Wrapping addition: `(a + b) mod 59049`. Total, no overflow path.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % TRYTE_MODULUS)
    }
}

impl AddAssign for Tryte {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl From<u32> for Tryte {
    #[inline]
    fn from(val: u32) -> Self {
        Self::new(val)
    }
}

impl From<Tryte> for u32 {
    #[inline]
    fn from(val: Tryte) -> u32 {
        val.0
    }
}

// --- Display ---

impl core::fmt::Display for Tryte {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
