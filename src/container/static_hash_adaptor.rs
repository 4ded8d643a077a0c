//! Fixed-capacity hash adaptor stored inline, with no heap allocation.
//!
//! The capacity `N` is part of the type. Slots are `(key, occupied)` pairs
//! initialised to `(K::default(), false)`. A table sized at compile time is
//! expected to be sized correctly, so running out of slots is treated as a
//! logic error: [`StaticHashAdaptor::insert`] aborts the process rather than
//! returning an error or unwinding.

use std::hash::Hash;

use log::{debug, error};

use crate::common::config::SlotIndex;
use crate::container::hash_function::{Fnv1aHash, KeyHasher};
use crate::container::key_comparator::{KeyComparator, NaturalEq};
use crate::container::probe::ProbeTable;
use crate::container::slot_storage::ArraySlots;

#[derive(Debug, Clone)]
pub struct StaticHashAdaptor<K, const N: usize, H = Fnv1aHash, C = NaturalEq> {
    table: ProbeTable<K, ArraySlots<K, N>, H, C>,
}

impl<K, const N: usize, H, C> StaticHashAdaptor<K, N, H, C> {
    /// Number of slots, known at compile time.
    pub const CAPACITY: usize = N;

    const NON_ZERO_CAPACITY: () = assert!(N > 0, "StaticHashAdaptor capacity must be non-zero");
}

impl<K: Default + Hash + PartialEq, const N: usize> StaticHashAdaptor<K, N> {
    /// Creates an empty adaptor hashing with [`Fnv1aHash`].
    pub fn new() -> Self {
        Self::with_hasher_and_comparator(Fnv1aHash, NaturalEq)
    }
}

impl<K: Default + Hash + PartialEq, const N: usize> Default for StaticHashAdaptor<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Default + PartialEq, const N: usize, H: KeyHasher<K>> StaticHashAdaptor<K, N, H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_hasher_and_comparator(hasher, NaturalEq)
    }
}

impl<K, const N: usize, H, C> StaticHashAdaptor<K, N, H, C>
where
    K: Default,
    H: KeyHasher<K>,
    C: KeyComparator<K>,
{
    pub fn with_hasher_and_comparator(hasher: H, comparator: C) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;
        Self {
            table: ProbeTable::new(ArraySlots::new(), hasher, comparator),
        }
    }

    /// Stores `key` and returns its slot index. A key already present keeps
    /// its slot.
    ///
    /// # Arguments
    /// - `key`: the key to store.
    ///
    /// # Returns
    /// The slot now holding a key equal to `key`.
    ///
    /// # Aborts
    /// Aborts the process when every slot holds a different key. Nothing
    /// unwinds, so `catch_unwind` cannot intercept it.
    pub fn insert(&mut self, key: K) -> SlotIndex {
        match self.table.insert(key) {
            Some(index) => index,
            None => {
                error!("StaticHashAdaptor with {} slots is full, aborting", N);
                std::process::abort()
            }
        }
    }

    /// Empties the slot holding `key`.
    ///
    /// # Arguments
    /// - `key`: the key to remove.
    ///
    /// # Returns
    /// The index of the emptied slot, or `None` if the key is not present,
    /// including on a full table.
    pub fn erase(&mut self, key: &K) -> Option<SlotIndex> {
        self.table.erase(key)
    }

    /// Slot where the probe sequence for `key` stops.
    ///
    /// # Arguments
    /// - `key`: the key to look up.
    ///
    /// # Returns
    /// The slot holding `key` or the empty slot an insert would take. `None`
    /// if the table is full without `key`.
    pub fn find(&self, key: &K) -> Option<SlotIndex> {
        self.table.find(key)
    }

    pub fn index_of(&self, key: &K) -> Option<SlotIndex> {
        self.table.index_of(key)
    }

    pub fn exists(&self, key: &K) -> bool {
        self.table.exists(key)
    }

    pub fn count(&self, key: &K) -> usize {
        usize::from(self.exists(key))
    }

    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() == N
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        self.table.clear();
        debug!("Cleared StaticHashAdaptor with {} slots", N);
    }

    pub fn keys(&self) -> impl Iterator<Item = (SlotIndex, &K)> + '_ {
        self.table.keys()
    }
}
