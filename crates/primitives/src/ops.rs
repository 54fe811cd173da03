//! The crazy operator and trit rotation.
//!
//! `crazy` is the machine's only binary instruction and, separately, the
//! generator used to fill memory beyond the loaded program text. Both uses
//! must agree, so the operator lives here next to the word type rather than
//! in the executor.

use crate::trit::Trit;
use crate::tryte::{Tryte, TRITS_PER_TRYTE};

/// The crazy operation lookup table, indexed `[a][b]`.
const CRAZY_TABLE: [[Trit; 3]; 3] = [
    [Trit::One, Trit::Zero, Trit::Zero],
    [Trit::One, Trit::Zero, Trit::Two],
    [Trit::Two, Trit::Two, Trit::One],
];

/// The crazy operation on single trits.
#[inline]
pub const fn crazy_trit(a: Trit, b: Trit) -> Trit {
    CRAZY_TABLE[a as usize][b as usize]
}

/// The crazy operation on full trytes.
///
/// Applies the table independently to each of the ten trit pairs and
/// recomposes. Total: any two trytes produce a valid tryte.
#[inline]
pub fn crazy(a: Tryte, b: Tryte) -> Tryte {
    let a_trits = a.to_trits();
    let b_trits = b.to_trits();
    let mut out = [Trit::Zero; TRITS_PER_TRYTE];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = crazy_trit(a_trits[i], b_trits[i]);
    }
    Tryte::from_trits(out)
}

/// Rotate a tryte right by one trit position.
///
/// The most significant trit becomes the least significant:
/// `[t0, t1, .., t9]` becomes `[t9, t0, .., t8]`. Total.
#[inline]
pub fn rotate_right(t: Tryte) -> Tryte {
    let trits = t.to_trits();
    let mut rotated = [Trit::Zero; TRITS_PER_TRYTE];
    rotated[0] = trits[TRITS_PER_TRYTE - 1];
    rotated[1..].copy_from_slice(&trits[..TRITS_PER_TRYTE - 1]);
    Tryte::from_trits(rotated)
}
