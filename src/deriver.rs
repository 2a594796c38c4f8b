use crate::composite::CompositeIter;
use crate::digest::{Digest64, DigestKind};
use crate::halves::{HalfOrder, Halves};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{debug, trace};

/// Derivation parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeriveConfig {
    /// Number of indices per content. Must be at least 1.
    pub k: u32,
    /// Table size; every index lands in `[0, m)`. Must be at least 1.
    pub m: u32,
    /// Base 64-bit digest.
    pub digest: DigestKind,
    /// Which digest half is the base and which the step.
    pub half_order: HalfOrder,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            k: 3,
            m: 1024,
            digest: DigestKind::Fnv1a,
            half_order: HalfOrder::Standard,
        }
    }
}

impl DeriveConfig {
    /// Settings that reproduce tables written by the old extension module:
    /// FNV-1 (not 1a) with swapped halves.
    pub fn legacy(k: u32, m: u32) -> Self {
        Self {
            k,
            m,
            digest: DigestKind::Fnv1,
            half_order: HalfOrder::Swapped,
        }
    }

    /// Checks `k` and `m`; `k` is checked first.
    pub fn validate(&self) -> Result<(NonZeroU32, NonZeroU32), IndexError> {
        let Some(k) = NonZeroU32::new(self.k) else {
            debug!(m = self.m, "rejecting derive config: k == 0");
            return Err(IndexError::ZeroHashCount);
        };
        let Some(m) = NonZeroU32::new(self.m) else {
            debug!(k = self.k, "rejecting derive config: m == 0");
            return Err(IndexError::ZeroTableSize);
        };
        Ok((k, m))
    }

    #[cfg(feature = "serde")]
    pub fn to_bytes(&self) -> Result<Vec<u8>, IndexError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes and re-validates, so a stored config with `k == 0` is refused.
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexError> {
        let cfg: Self = bincode::deserialize(bytes)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid argument: k must be greater than 0")]
    ZeroHashCount,
    #[error("invalid argument: m must be greater than 0 (modulus by zero)")]
    ZeroTableSize,
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] Box<bincode::ErrorKind>),
}

impl IndexError {
    /// True for the caller-supplied parameter errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, IndexError::ZeroHashCount | IndexError::ZeroTableSize)
    }
}

/// Validated `(k, m)` plus the digest used to hash content.
///
/// Stateless across calls: every method takes `&self` and the deriver
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct IndexDeriver<D = DigestKind> {
    k: NonZeroU32,
    m: NonZeroU32,
    order: HalfOrder,
    digest: D,
}

impl IndexDeriver<DigestKind> {
    /// FNV-1a, standard half order.
    pub fn new(k: u32, m: u32) -> Result<Self, IndexError> {
        Self::from_config(DeriveConfig {
            k,
            m,
            ..Default::default()
        })
    }

    pub fn legacy(k: u32, m: u32) -> Result<Self, IndexError> {
        Self::from_config(DeriveConfig::legacy(k, m))
    }

    pub fn from_config(cfg: DeriveConfig) -> Result<Self, IndexError> {
        let (k, m) = cfg.validate()?;
        debug!(k = cfg.k, m = cfg.m, digest = ?cfg.digest, order = ?cfg.half_order, "index deriver ready");
        Ok(Self {
            k,
            m,
            order: cfg.half_order,
            digest: cfg.digest,
        })
    }

    pub fn config(&self) -> DeriveConfig {
        DeriveConfig {
            k: self.k.get(),
            m: self.m.get(),
            digest: self.digest,
            half_order: self.order,
        }
    }
}

impl<D: Digest64> IndexDeriver<D> {
    /// Swap in another digest, keeping `k`, `m` and the half order.
    pub fn with_digest<E: Digest64>(self, digest: E) -> IndexDeriver<E> {
        IndexDeriver {
            k: self.k,
            m: self.m,
            order: self.order,
            digest,
        }
    }

    pub fn with_half_order(mut self, order: HalfOrder) -> Self {
        self.order = order;
        self
    }

    #[inline]
    pub fn k(&self) -> u32 {
        self.k.get()
    }

    #[inline]
    pub fn m(&self) -> u32 {
        self.m.get()
    }

    #[inline]
    pub fn half_order(&self) -> HalfOrder {
        self.order
    }

    #[inline]
    pub fn halves(&self, content: &[u8]) -> Halves {
        Halves::split(self.digest.digest(content))
    }

    /// Hashes once and yields the `k` indices lazily.
    #[inline]
    pub fn iter(&self, content: &[u8]) -> CompositeIter {
        CompositeIter::new(self.halves(content), self.order, self.k, self.m)
    }

    pub fn indices(&self, content: &[u8]) -> Vec<u32> {
        self.iter(content).collect()
    }

    #[inline]
    pub fn indices_str(&self, s: &str) -> Vec<u32> {
        self.indices(s.as_bytes())
    }

    /// Clears `out` and fills it with the indices, reusing its allocation.
    pub fn indices_into(&self, content: &[u8], out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.iter(content));
    }

    /// One index sequence per content, in input order.
    /// Runs on the rayon pool when the "parallel" feature is enabled.
    pub fn indices_batch<K, I>(&self, contents: I) -> Vec<Vec<u32>>
    where
        K: Borrow<[u8]> + Send + Sync,
        I: IntoIterator<Item = K>,
    {
        let contents: Vec<K> = contents.into_iter().collect();
        trace!(n = contents.len(), k = self.k(), m = self.m(), "deriving batch");

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            contents.par_iter().map(|c| self.indices(c.borrow())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            contents.iter().map(|c| self.indices(c.borrow())).collect()
        }
    }
}
