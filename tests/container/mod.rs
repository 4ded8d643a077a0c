mod slot_indexer_tests;
mod static_hash_adaptor_tests;
