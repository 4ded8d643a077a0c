//! Heap-backed hash adaptor with a capacity chosen at runtime.
//!
//! [`HashAdaptor`] maps keys to slot indices in `[0, capacity)`. It stores
//! only the keys; callers keep whatever they associate with a key in their
//! own array of the same length, addressed by the returned index.
//!
//! The capacity is fixed at construction. There is no resize or rehash: to
//! grow, build a larger adaptor and reinsert every key from [`keys`].
//!
//! An insert into a full table with an absent key fails with
//! [`HashAdaptorError::CapacityExhausted`] and leaves the table untouched.
//!
//! The adaptor performs no internal synchronisation. Share it across threads
//! behind an external lock.
//!
//! [`keys`]: HashAdaptor::keys

use std::hash::Hash;

use log::{debug, warn};

use crate::common::config::SlotIndex;
use crate::common::exception::HashAdaptorError;
use crate::container::hash_function::{KeyHasher, StdHash};
use crate::container::key_comparator::{KeyComparator, NaturalEq};
use crate::container::probe::ProbeTable;
use crate::container::slot_storage::VecSlots;

#[derive(Debug, Clone)]
pub struct HashAdaptor<K, H = StdHash, C = NaturalEq> {
    table: ProbeTable<K, VecSlots<K>, H, C>,
}

impl<K: Hash + PartialEq> HashAdaptor<K> {
    /// Creates an adaptor with `capacity` empty slots, hashing with
    /// [`StdHash`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher_and_comparator(capacity, StdHash, NaturalEq)
    }
}

impl<K: PartialEq, H: KeyHasher<K>> HashAdaptor<K, H> {
    /// Creates an adaptor that hashes keys with `hasher`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self::with_hasher_and_comparator(capacity, hasher, NaturalEq)
    }
}

impl<K, H, C> HashAdaptor<K, H, C>
where
    H: KeyHasher<K>,
    C: KeyComparator<K>,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher_and_comparator(capacity: usize, hasher: H, comparator: C) -> Self {
        assert!(capacity > 0, "HashAdaptor capacity must be non-zero");
        debug!("Creating HashAdaptor with capacity {}", capacity);
        Self {
            table: ProbeTable::new(VecSlots::new(capacity), hasher, comparator),
        }
    }

    /// Stores `key` and returns its slot index.
    ///
    /// Inserting a key that is already present returns its existing slot and
    /// changes nothing.
    ///
    /// # Arguments
    /// - `key`: the key to store. Dropped if an equal key is already present.
    ///
    /// # Returns
    /// The slot now holding a key equal to `key`.
    ///
    /// # Errors
    ///
    /// [`HashAdaptorError::CapacityExhausted`] when every slot holds a
    /// different key.
    pub fn insert(&mut self, key: K) -> Result<SlotIndex, HashAdaptorError> {
        self.table.insert(key).ok_or_else(|| {
            let capacity = self.table.capacity();
            warn!("HashAdaptor is full, rejecting insert (capacity {})", capacity);
            HashAdaptorError::CapacityExhausted { capacity }
        })
    }

    /// Empties the slot holding `key`.
    ///
    /// # Arguments
    /// - `key`: the key to remove.
    ///
    /// # Returns
    /// The index of the emptied slot, or `None` if the key is not present. A
    /// full table without `key` also yields `None` and is left unchanged.
    pub fn erase(&mut self, key: &K) -> Option<SlotIndex> {
        self.table.erase(key)
    }

    /// Slot where the probe sequence for `key` stops.
    ///
    /// # Arguments
    /// - `key`: the key to look up.
    ///
    /// # Returns
    /// The slot holding `key`, or the empty slot an insert would use. `None`
    /// if the table is full and the key is absent.
    pub fn find(&self, key: &K) -> Option<SlotIndex> {
        self.table.find(key)
    }

    /// Slot holding `key`, if present.
    pub fn index_of(&self, key: &K) -> Option<SlotIndex> {
        self.table.index_of(key)
    }

    pub fn exists(&self, key: &K) -> bool {
        self.table.exists(key)
    }

    /// `1` if `key` is present, `0` otherwise.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.exists(key))
    }

    /// Number of occupied slots. Scans the table, O(capacity).
    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Empties every slot. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Occupied slots with their keys, in slot order.
    pub fn keys(&self) -> impl Iterator<Item = (SlotIndex, &K)> + '_ {
        self.table.keys()
    }
}
