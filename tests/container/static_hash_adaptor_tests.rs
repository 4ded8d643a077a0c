use std::env;
use std::process::Command;

use hash_adaptor::{StaticHashAdaptor, Xxh3Hash, scale_hash};

use crate::common::logger::init_test_logger;

const ABORT_CHILD_ENV: &str = "HASH_ADAPTOR_STATIC_ABORT_CHILD";
const ABORT_TEST_PATH: &str =
    "container::static_hash_adaptor_tests::test_insert_into_full_static_table_aborts";

const LIBTEST_PANIC_EXIT_CODE: i32 = 101;
#[cfg(unix)]
const SIGABRT: i32 = 6;

fn identity(key: &u64) -> u64 {
    *key
}

type IdentityStatic<const N: usize> = StaticHashAdaptor<u64, N, fn(&u64) -> u64>;

fn identity_table<const N: usize>() -> IdentityStatic<N> {
    StaticHashAdaptor::with_hasher(identity as fn(&u64) -> u64)
}

#[test]
fn test_insert_new_key_grows_size_by_one() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<u32, 32>::new();
    for key in 0..32u32 {
        let before = table.size();
        table.insert(key);
        assert!(table.exists(&key));
        assert_eq!(table.size(), before + 1);
    }
    assert!(table.is_full());
}

#[test]
fn test_insert_is_idempotent() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<String, 4>::new();
    let first = table.insert("slot".to_string());
    let second = table.insert("slot".to_string());
    assert_eq!(first, second);
    assert_eq!(table.size(), 1);
}

#[test]
fn test_erase_absent_and_round_trip() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<i32, 8>::new();
    table.insert(-1);
    assert_eq!(table.erase(&2), None);
    assert_eq!(table.size(), 1);

    let index = table.insert(2);
    assert_eq!(table.erase(&2), Some(index));
    assert!(!table.exists(&2));
    assert_eq!(table.size(), 1);
}

#[test]
fn test_identity_hash_capacity_four() {
    init_test_logger();
    let mut table = identity_table::<4>();
    assert_eq!(table.insert(10), 3);
    assert_eq!(table.insert(20), 1);
    assert_eq!(table.insert(30), 0);

    assert_eq!(table.erase(&20), Some(1));
    assert_eq!(scale_hash(40, 4), 1);
    assert_eq!(table.insert(40), 1);
    assert_eq!(table.count(&40), 1);
    assert_eq!(table.count(&20), 0);
}

#[test]
fn test_erase_leaves_no_tombstone() {
    init_test_logger();
    let mut table = identity_table::<4>();
    table.insert(10);
    table.insert(30);
    table.erase(&10);
    // Same caveat as the heap-backed adaptor: 30 sits past the emptied slot.
    assert!(!table.exists(&30));
    assert_eq!(table.size(), 1);
}

#[test]
fn test_two_distinct_keys_fill_capacity_two() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<u64, 2, Xxh3Hash>::with_hasher(Xxh3Hash);
    let a = table.insert(1);
    let b = table.insert(2);
    assert_ne!(a, b);
    assert!(table.is_full());
    assert_eq!(table.find(&3), None);
    assert_eq!(table.insert(1), a);
}

#[test]
fn test_full_table_reports_absent_key_missing() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<u32, 4>::new();
    for key in 0..4u32 {
        table.insert(key);
    }
    assert!(table.is_full());

    // Every slot holds another key, so the probe runs the whole table.
    assert_eq!(table.find(&99), None);
    assert_eq!(table.index_of(&99), None);
    assert!(!table.exists(&99));
    assert_eq!(table.count(&99), 0);
    assert_eq!(table.erase(&99), None);
    assert_eq!(table.size(), 4);
    for key in 0..4u32 {
        assert!(table.exists(&key));
    }
}

#[test]
fn test_keys_and_clear() {
    init_test_logger();
    let mut table = StaticHashAdaptor::<char, 8>::new();
    for key in ['x', 'y', 'z'] {
        table.insert(key);
    }
    let mut keys: Vec<char> = table.keys().map(|(_, key)| *key).collect();
    keys.sort_unstable();
    assert_eq!(keys, ['x', 'y', 'z']);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.keys().count(), 0);
}

/// Runs itself in a child process; the child overfills a table and must die.
#[test]
fn test_insert_into_full_static_table_aborts() {
    if env::var_os(ABORT_CHILD_ENV).is_some() {
        let mut table = StaticHashAdaptor::<u32, 2>::new();
        table.insert(1);
        table.insert(2);
        table.insert(3);
        // Reaching this point makes the child exit successfully, failing the parent.
        return;
    }

    init_test_logger();
    let status = Command::new(env::current_exe().unwrap())
        .args([ABORT_TEST_PATH, "--exact", "--test-threads=1", "--nocapture"])
        .env(ABORT_CHILD_ENV, "1")
        .status()
        .unwrap();

    assert!(!status.success(), "child exited with {:?}", status);
    assert_ne!(status.code(), Some(0));
    // A panicking test exits with 101; the table must terminate without unwinding.
    assert_ne!(status.code(), Some(LIBTEST_PANIC_EXIT_CODE), "child panicked instead of aborting");

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(status.signal(), Some(SIGABRT), "child exited with {:?}", status);
    }
}
