#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const LOW_32: u64 = 0xFFFF_FFFF;

/// The two 32-bit halves of a 64-bit digest.
///
/// They stand in for two independent hash functions, so one digest
/// is enough to drive the whole double-hashing sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Halves {
    pub upper: u32, // bits 32..64
    pub lower: u32, // bits 0..32
}

impl Halves {
    #[inline]
    pub const fn split(digest: u64) -> Self {
        Self {
            upper: ((digest >> 32) & LOW_32) as u32,
            lower: (digest & LOW_32) as u32,
        }
    }

    /// Reassembles the digest the halves were split from.
    #[inline]
    pub const fn join(self) -> u64 {
        ((self.upper as u64) << 32) | self.lower as u64
    }

    /// `(h1, h2)` for `h1 + i * h2 + i^2` under the given order.
    #[inline]
    pub const fn seeds(self, order: HalfOrder) -> (u32, u32) {
        match order {
            HalfOrder::Standard => (self.lower, self.upper),
            HalfOrder::Swapped => (self.upper, self.lower),
        }
    }
}

/// Which half plays the role of the base (`h1`) and which the step (`h2`).
///
/// `Swapped` exists for tables built by the old extension module, whose
/// "upper" helper masked the low word and vice versa.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HalfOrder {
    /// `h1 = lower`, `h2 = upper`.
    #[default]
    Standard,
    /// `h1 = upper`, `h2 = lower`.
    Swapped,
}
