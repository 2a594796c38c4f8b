//! 64-bit base digests.
//!
//! The whole index derivation runs off a single 64-bit hash of the content.
//! FNV-1a is the default; any deterministic 64-bit hash can stand in for it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// FNV 64-bit offset basis.
pub const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a/64: xor the byte in, then multiply.
#[inline]
pub const fn fnv1a_64(content: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    let mut i = 0;
    while i < content.len() {
        h ^= content[i] as u64;
        h = h.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    h
}

/// FNV-1/64: multiply, then xor the byte in.
#[inline]
pub const fn fnv1_64(content: &[u8]) -> u64 {
    let mut h = FNV_OFFSET;
    let mut i = 0;
    while i < content.len() {
        h = h.wrapping_mul(FNV_PRIME);
        h ^= content[i] as u64;
        i += 1;
    }
    h
}

/// A deterministic 64-bit hash of a byte string.
pub trait Digest64: Send + Sync {
    fn digest(&self, content: &[u8]) -> u64;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl Digest64 for Fnv1a {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        fnv1a_64(content)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fnv1;

impl Digest64 for Fnv1 {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        fnv1_64(content)
    }
}

/// XXH3-64 with a fixed seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3 {
    pub seed: u64,
}

impl Digest64 for Xxh3 {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        xxh3_64_with_seed(content, self.seed)
    }
}

/// wyhash with a fixed seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WyHash {
    pub seed: u64,
}

impl Digest64 for WyHash {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        wyhash::wyhash(content, self.seed)
    }
}

/// Digest selection as a plain config value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigestKind {
    #[default]
    Fnv1a,
    Fnv1,
    Xxh3 { seed: u64 },
    WyHash { seed: u64 },
}

impl Digest64 for DigestKind {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        match *self {
            DigestKind::Fnv1a => fnv1a_64(content),
            DigestKind::Fnv1 => fnv1_64(content),
            DigestKind::Xxh3 { seed } => Xxh3 { seed }.digest(content),
            DigestKind::WyHash { seed } => WyHash { seed }.digest(content),
        }
    }
}

impl<D: Digest64 + ?Sized> Digest64 for &D {
    #[inline]
    fn digest(&self, content: &[u8]) -> u64 {
        (**self).digest(content)
    }
}
