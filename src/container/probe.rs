//! Linear probing with wraparound, shared by both hash adaptors.
//!
//! A probe for `key` starts at `scale_hash(hash(key), capacity)` and walks
//! `start, start + 1, .., capacity - 1, 0, .., start - 1`, stopping at the
//! first slot that is empty or holds a key equal to `key`.
//!
//! Erase clears a slot back to empty; there are no tombstones. A probe for a
//! key stored past a cleared slot in its collision chain therefore stops at
//! the cleared slot and reports the key as absent.

use std::marker::PhantomData;

use log::{debug, trace};

use crate::common::config::SlotIndex;
use crate::container::hash_function::KeyHasher;
use crate::container::hash_scale::scale_hash;
use crate::container::key_comparator::KeyComparator;
use crate::container::slot_storage::SlotStorage;

/// Where a probe sequence stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// First empty slot on the sequence; the key is not stored before it.
    Vacant(SlotIndex),
    /// Slot holding a key equal to the probed key.
    Occupied(SlotIndex),
    /// Every slot is occupied by a different key.
    Exhausted,
}

impl ProbeResult {
    /// Landing slot, whether vacant or occupied.
    pub fn slot(self) -> Option<SlotIndex> {
        match self {
            ProbeResult::Vacant(index) | ProbeResult::Occupied(index) => Some(index),
            ProbeResult::Exhausted => None,
        }
    }

    pub fn is_occupied(self) -> bool {
        matches!(self, ProbeResult::Occupied(_))
    }
}

/// Runs the probe sequence for `key` whose raw hash is `hash`.
pub fn probe<K, S, C>(slots: &S, hash: u64, key: &K, comparator: &C) -> ProbeResult
where
    S: SlotStorage<K> + ?Sized,
    C: KeyComparator<K> + ?Sized,
{
    let capacity = slots.capacity();
    let start = scale_hash(hash, capacity);

    for index in (start..capacity).chain(0..start) {
        match slots.key_at(index) {
            None => return ProbeResult::Vacant(index),
            Some(existing) if comparator.keys_equal(existing, key) => {
                return ProbeResult::Occupied(index);
            }
            Some(_) => {}
        }
    }

    ProbeResult::Exhausted
}

/// Slot storage bundled with the hasher and comparator that drive probing.
///
/// Holds all behaviour common to [`HashAdaptor`] and [`StaticHashAdaptor`];
/// the two differ only in storage and in what happens when an insert finds
/// no slot.
///
/// [`HashAdaptor`]: crate::container::hash_adaptor::HashAdaptor
/// [`StaticHashAdaptor`]: crate::container::static_hash_adaptor::StaticHashAdaptor
#[derive(Debug, Clone)]
pub struct ProbeTable<K, S, H, C> {
    slots: S,
    hasher: H,
    comparator: C,
    _key: PhantomData<K>,
}

impl<K, S, H, C> ProbeTable<K, S, H, C>
where
    S: SlotStorage<K>,
    H: KeyHasher<K>,
    C: KeyComparator<K>,
{
    pub fn new(slots: S, hasher: H, comparator: C) -> Self {
        debug_assert!(slots.capacity() > 0, "probe table needs at least one slot");
        Self {
            slots,
            hasher,
            comparator,
            _key: PhantomData,
        }
    }

    /// Probes for `key` without modifying the table.
    pub fn locate(&self, key: &K) -> ProbeResult {
        let hash = self.hasher.hash_key(key);
        let result = probe(&self.slots, hash, key, &self.comparator);
        trace!(
            "Probe for hash {:#018x} over {} slots landed at {:?}",
            hash,
            self.slots.capacity(),
            result
        );
        result
    }

    /// Stores `key` unless an equal key is already present.
    ///
    /// Returns the slot holding the key, or `None` when the table is full and
    /// the key is absent. The table is unchanged in that case.
    pub fn insert(&mut self, key: K) -> Option<SlotIndex> {
        match self.locate(&key) {
            ProbeResult::Vacant(index) => {
                self.slots.write(index, key);
                debug!("Inserted key into slot {}", index);
                Some(index)
            }
            ProbeResult::Occupied(index) => Some(index),
            ProbeResult::Exhausted => None,
        }
    }

    /// Empties the slot holding `key`, returning its index.
    pub fn erase(&mut self, key: &K) -> Option<SlotIndex> {
        match self.locate(key) {
            ProbeResult::Occupied(index) => {
                self.slots.clear(index);
                debug!("Erased key from slot {}", index);
                Some(index)
            }
            ProbeResult::Vacant(_) | ProbeResult::Exhausted => None,
        }
    }

    pub fn find(&self, key: &K) -> Option<SlotIndex> {
        self.locate(key).slot()
    }

    pub fn index_of(&self, key: &K) -> Option<SlotIndex> {
        match self.locate(key) {
            ProbeResult::Occupied(index) => Some(index),
            _ => None,
        }
    }

    pub fn exists(&self, key: &K) -> bool {
        self.locate(key).is_occupied()
    }

    /// Occupied slots, counted by scanning the whole table.
    pub fn size(&self) -> usize {
        self.slots.occupied_count()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn clear(&mut self) {
        for index in 0..self.slots.capacity() {
            self.slots.clear(index);
        }
        debug!("Cleared all {} slots", self.slots.capacity());
    }

    /// Occupied slots and their keys, in slot order.
    pub fn keys(&self) -> impl Iterator<Item = (SlotIndex, &K)> + '_ {
        (0..self.slots.capacity())
            .filter_map(move |index| self.slots.key_at(index).map(|key| (index, key)))
    }
}
