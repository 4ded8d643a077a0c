//! Backing arrays for the hash adaptors.
//!
//! A slot is either empty or holds exactly one key. The probe routine only
//! talks to storage through [`SlotStorage`], so both representations below
//! share one probing implementation.
//!
//! | Storage        | Lives      | Slot layout        | Empty slot               |
//! |----------------|------------|--------------------|--------------------------|
//! | [`VecSlots`]   | heap       | `Option<K>`        | `None`                   |
//! | [`ArraySlots`] | inline     | `(K, bool)`        | `(K::default(), false)`  |
//!
//! Neither storage ever changes length after construction.

use crate::common::config::SlotIndex;

/// Fixed-length array of optional keys.
///
/// Indices passed in must be `< capacity()`; anything else is a logic error
/// and panics on the underlying slice access.
pub trait SlotStorage<K> {
    /// Number of slots. Never changes for the lifetime of the storage.
    fn capacity(&self) -> usize;

    /// Key held by slot `index`, `None` when the slot is empty.
    fn key_at(&self, index: SlotIndex) -> Option<&K>;

    fn is_occupied(&self, index: SlotIndex) -> bool {
        self.key_at(index).is_some()
    }

    /// Stores `key` in slot `index`, replacing whatever was there.
    fn write(&mut self, index: SlotIndex, key: K);

    /// Empties slot `index`, handing back the key it held.
    fn clear(&mut self, index: SlotIndex) -> Option<K>;

    /// Counts occupied slots with a full scan.
    fn occupied_count(&self) -> usize {
        (0..self.capacity())
            .filter(|&index| self.is_occupied(index))
            .count()
    }
}

/// Heap-allocated slots, sized once at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecSlots<K> {
    slots: Vec<Option<K>>,
}

impl<K> VecSlots<K> {
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }
}

impl<K> SlotStorage<K> for VecSlots<K> {
    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn key_at(&self, index: SlotIndex) -> Option<&K> {
        self.slots[index].as_ref()
    }

    fn write(&mut self, index: SlotIndex, key: K) {
        self.slots[index] = Some(key);
    }

    fn clear(&mut self, index: SlotIndex) -> Option<K> {
        self.slots[index].take()
    }
}

/// Inline `(key, occupied)` slots with a compile-time length. Never allocates.
///
/// Empty slots hold `K::default()`; that value is never observed through
/// [`SlotStorage::key_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySlots<K, const N: usize> {
    slots: [(K, bool); N],
}

impl<K: Default, const N: usize> ArraySlots<K, N> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| (K::default(), false)),
        }
    }
}

impl<K: Default, const N: usize> Default for ArraySlots<K, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Default, const N: usize> SlotStorage<K> for ArraySlots<K, N> {
    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn key_at(&self, index: SlotIndex) -> Option<&K> {
        let (key, occupied) = &self.slots[index];
        occupied.then_some(key)
    }

    #[inline]
    fn is_occupied(&self, index: SlotIndex) -> bool {
        self.slots[index].1
    }

    fn write(&mut self, index: SlotIndex, key: K) {
        self.slots[index] = (key, true);
    }

    fn clear(&mut self, index: SlotIndex) -> Option<K> {
        let (key, occupied) = std::mem::take(&mut self.slots[index]);
        occupied.then_some(key)
    }
}
