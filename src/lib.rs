//! Open-addressed hash adaptors that map keys to slot indices of a
//! fixed-capacity table.
//!
//! - [`HashAdaptor`]: capacity chosen at runtime, heap-backed slots, a full
//!   table reports [`HashAdaptorError::CapacityExhausted`].
//! - [`StaticHashAdaptor`]: capacity fixed by a const generic, inline slots,
//!   a full table aborts the process.
//!
//! Both probe linearly with wraparound from `scale_hash(hash(key), capacity)`
//! and never resize.

pub mod common;
pub mod container;

pub use common::config::SlotIndex;
pub use common::exception::HashAdaptorError;
pub use container::hash_adaptor::HashAdaptor;
pub use container::hash_function::{
    Fnv1aHash, Fnv1aHasher, KeyHasher, StdHash, Xxh3Hash, fnv1a_64,
};
pub use container::hash_scale::scale_hash;
pub use container::key_comparator::{KeyComparator, NaturalEq};
pub use container::slot_indexer::SlotIndexer;
pub use container::static_hash_adaptor::StaticHashAdaptor;
