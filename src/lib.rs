//! composite_hash — hash-once, derive-many bloom filter indices.
//!
//! - One 64-bit FNV-1a digest per content.
//! - Its two 32-bit halves act as two independent hashes `h1`, `h2`.
//! - Index `i` of `k` is `(h1 + i * h2 + i^2) % m` (Kirsch-Mitzenmacher), u32 wrapping.
//!
//! ```
//! let idx = composite_hash::compute_composite_hash(b"hello", 3, 100).unwrap();
//! assert_eq!(idx, vec![63, 86, 7]);
//! ```

mod composite;
mod deriver;
pub mod digest;
mod halves;

pub use composite::{composite, derive_indices, CompositeIter};
pub use deriver::{DeriveConfig, IndexDeriver, IndexError};
pub use digest::{fnv1a_64, Digest64, DigestKind};
pub use halves::{HalfOrder, Halves};

/// `k` indices in `[0, m)` for `content`, FNV-1a with the standard half order.
///
/// Fails with an invalid-argument error when `k == 0` or `m == 0`.
pub fn compute_composite_hash(content: &[u8], k: u32, m: u32) -> Result<Vec<u32>, IndexError> {
    Ok(IndexDeriver::new(k, m)?.indices(content))
}
