pub mod hash_adaptor;
pub mod hash_function;
pub mod hash_scale;
pub mod key_comparator;
pub mod probe;
pub mod slot_indexer;
pub mod slot_storage;
pub mod static_hash_adaptor;
