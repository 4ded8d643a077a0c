use crate::common::config::SlotIndex;
use crate::container::hash_adaptor::HashAdaptor;
use crate::container::hash_function::KeyHasher;
use crate::container::key_comparator::KeyComparator;
use crate::container::static_hash_adaptor::StaticHashAdaptor;

/// Operations shared by [`HashAdaptor`] and [`StaticHashAdaptor`].
///
/// Insert is left out on purpose: the two variants disagree on what a full
/// table does.
pub trait SlotIndexer<K> {
    fn find(&self, key: &K) -> Option<SlotIndex>;
    fn index_of(&self, key: &K) -> Option<SlotIndex>;
    fn erase(&mut self, key: &K) -> Option<SlotIndex>;
    fn exists(&self, key: &K) -> bool;
    fn size(&self) -> usize;
    fn capacity(&self) -> usize;
    fn clear(&mut self);

    fn count(&self, key: &K) -> usize {
        usize::from(self.exists(key))
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }
}

impl<K, H, C> SlotIndexer<K> for HashAdaptor<K, H, C>
where
    H: KeyHasher<K>,
    C: KeyComparator<K>,
{
    fn find(&self, key: &K) -> Option<SlotIndex> {
        HashAdaptor::find(self, key)
    }

    fn index_of(&self, key: &K) -> Option<SlotIndex> {
        HashAdaptor::index_of(self, key)
    }

    fn erase(&mut self, key: &K) -> Option<SlotIndex> {
        HashAdaptor::erase(self, key)
    }

    fn exists(&self, key: &K) -> bool {
        HashAdaptor::exists(self, key)
    }

    fn size(&self) -> usize {
        HashAdaptor::size(self)
    }

    fn capacity(&self) -> usize {
        HashAdaptor::capacity(self)
    }

    fn clear(&mut self) {
        HashAdaptor::clear(self)
    }
}

impl<K, const N: usize, H, C> SlotIndexer<K> for StaticHashAdaptor<K, N, H, C>
where
    K: Default,
    H: KeyHasher<K>,
    C: KeyComparator<K>,
{
    fn find(&self, key: &K) -> Option<SlotIndex> {
        StaticHashAdaptor::find(self, key)
    }

    fn index_of(&self, key: &K) -> Option<SlotIndex> {
        StaticHashAdaptor::index_of(self, key)
    }

    fn erase(&mut self, key: &K) -> Option<SlotIndex> {
        StaticHashAdaptor::erase(self, key)
    }

    fn exists(&self, key: &K) -> bool {
        StaticHashAdaptor::exists(self, key)
    }

    fn size(&self) -> usize {
        StaticHashAdaptor::size(self)
    }

    fn capacity(&self) -> usize {
        StaticHashAdaptor::capacity(self)
    }

    fn clear(&mut self) {
        StaticHashAdaptor::clear(self)
    }
}
