use hash_adaptor::{HashAdaptor, SlotIndexer, StaticHashAdaptor};

use crate::common::logger::init_test_logger;

/// Checks the shared surface against a table already holding `present`.
fn check_indexer<T: SlotIndexer<u32>>(table: &mut T, present: &[u32], absent: u32) {
    assert_eq!(table.size(), present.len());
    assert_eq!(table.is_empty(), present.is_empty());

    for key in present {
        assert!(table.exists(key));
        assert_eq!(table.count(key), 1);
        assert_eq!(table.index_of(key), table.find(key));
    }
    assert!(!table.exists(&absent));
    assert_eq!(table.index_of(&absent), None);
    assert_eq!(table.erase(&absent), None);

    let last = *present.last().unwrap();
    let index = table.index_of(&last).unwrap();
    assert_eq!(table.erase(&last), Some(index));
    assert_eq!(table.size(), present.len() - 1);

    table.clear();
    assert!(table.is_empty());
    assert!(!table.is_full());
}

#[test]
fn test_dynamic_adaptor_as_slot_indexer() {
    init_test_logger();
    let mut table = HashAdaptor::new(8);
    for key in [4u32, 8, 15] {
        table.insert(key).unwrap();
    }
    check_indexer(&mut table, &[4, 8, 15], 16);
    assert_eq!(SlotIndexer::capacity(&table), 8);
}

#[test]
fn test_static_adaptor_as_slot_indexer() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<u32, 8>::new();
    for key in [16u32, 23, 42] {
        table.insert(key);
    }
    check_indexer(&mut table, &[16, 23, 42], 4);
    assert!(!SlotIndexer::is_full(&table));
}
