use std::hash::{DefaultHasher, Hash, Hasher};

use xxhash_rust::xxh3;

use crate::common::config::{FNV1A_OFFSET_BASIS, FNV1A_PRIME};

/// Maps a key to a raw 64-bit hash.
///
/// Any `Fn(&K) -> u64` is a `KeyHasher`, so callers can plug in an opaque
/// hash function without declaring a type.
pub trait KeyHasher<K: ?Sized> {
    fn hash_key(&self, key: &K) -> u64;
}

impl<K, F> KeyHasher<K> for F
where
    K: ?Sized,
    F: Fn(&K) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// The standard library's hasher. Default for [`HashAdaptor`].
///
/// [`HashAdaptor`]: crate::container::hash_adaptor::HashAdaptor
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdHash;

impl<K: Hash + ?Sized> KeyHasher<K> for StdHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

/// 64-bit FNV-1a. Default for [`StaticHashAdaptor`].
///
/// [`StaticHashAdaptor`]: crate::container::static_hash_adaptor::StaticHashAdaptor
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHash;

impl<K: Hash + ?Sized> KeyHasher<K> for Fnv1aHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = Fnv1aHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}

/// Streaming FNV-1a state usable wherever a `std::hash::Hasher` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    pub const fn new() -> Self {
        Self {
            state: FNV1A_OFFSET_BASIS,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV1A_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// FNV-1a over a byte slice, evaluable at compile time.
pub const fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut state = FNV1A_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        state ^= bytes[i] as u64;
        state = state.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    state
}

/// xxh3 (64-bit) fed through `Hash`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Xxh3Hash;

impl<K: Hash + ?Sized> KeyHasher<K> for Xxh3Hash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut hasher = xxh3::Xxh3::new();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
