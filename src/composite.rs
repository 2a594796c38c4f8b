use crate::halves::{HalfOrder, Halves};
use std::iter::FusedIterator;
use std::num::NonZeroU32;

/// Kirsch-Mitzenmacher composite index for round `i`:
/// idx = (h1 + i * h2 + i^2) % m, all in wrapping u32 arithmetic.
#[inline]
pub const fn composite(h1: u32, h2: u32, i: u32, m: NonZeroU32) -> u32 {
    let mixed = h1
        .wrapping_add(i.wrapping_mul(h2))
        .wrapping_add(i.wrapping_mul(i));
    mixed % m.get()
}

/// All `k` composite indices for one digest, `i` ascending.
/// Duplicates across rounds are kept.
pub fn derive_indices(halves: Halves, k: NonZeroU32, m: NonZeroU32) -> Vec<u32> {
    CompositeIter::new(halves, HalfOrder::Standard, k, m).collect()
}

/// Lazy form of [`derive_indices`]; nothing is allocated.
#[derive(Clone, Debug)]
pub struct CompositeIter {
    h1: u32,
    h2: u32,
    m: NonZeroU32,
    i: u32,
    k: u32,
}

impl CompositeIter {
    #[inline]
    pub fn new(halves: Halves, order: HalfOrder, k: NonZeroU32, m: NonZeroU32) -> Self {
        let (h1, h2) = halves.seeds(order);
        Self {
            h1,
            h2,
            m,
            i: 0,
            k: k.get(),
        }
    }
}

impl Iterator for CompositeIter {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.i >= self.k {
            return None;
        }
        let idx = composite(self.h1, self.h2, self.i, self.m);
        self.i += 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.k - self.i) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CompositeIter {}
impl FusedIterator for CompositeIter {}
