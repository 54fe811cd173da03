//! The ternary digit.

use serde::{Deserialize, Serialize};

/// A single ternary digit: 0, 1, or 2.
///
/// Trits never exist on their own in the machine; they appear inside a
/// [`Tryte`](crate::Tryte) or as intermediates during decomposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Trit {
    #[default]
    Zero = 0,
    One = 1,
    Two = 2,
}

impl Trit {
    /// The trit's numeric value.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Convert the remainder of a division by 3 into a trit.
    #[inline]
    pub const fn from_rem(rem: u32) -> Self {
        match rem % 3 {
            0 => Trit::Zero,
            1 => Trit::One,
            _ => Trit::Two,
        }
    }
}

impl From<Trit> for u32 {
    #[inline]
    fn from(t: Trit) -> u32 {
        t.value()
    }
}
