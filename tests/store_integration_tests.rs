//! Integration Tests for the public store API
//!
//! Exercises the scenarios a caller relies on through the crate root exports.

use lru_store::{shell, Config, DynamicStore, Key, LruError, LruStore};
use serde_json::{json, Value};

// == Helper Functions ==

fn create_test_store() -> LruStore<i32> {
    LruStore::new(3).unwrap()
}

// == Construction ==

#[test]
fn test_create_store_with_invalid_capacity() {
    assert!(matches!(
        LruStore::<String>::new(0),
        Err(LruError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        DynamicStore::from_config(&Config::with_capacity(0)),
        Err(LruError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_create_store_from_default_config() {
    let store = LruStore::<String>::from_config(&Config::default()).unwrap();
    assert_eq!(store.capacity(), 1000);
    assert!(store.is_empty());
}

// == Get / Set ==

#[test]
fn test_can_set_and_get_value() {
    let mut store = LruStore::new(3).unwrap();

    store.set("foo", "bar".to_string());

    assert_eq!(store.get("foo").map(String::as_str), Some("bar"));
}

#[test]
fn test_can_overwrite_existing_key() {
    let mut store = LruStore::new(3).unwrap();

    store.set("foo", "bar");
    store.set("foo", "baz");

    assert_eq!(store.get("foo"), Some(&"baz"));
}

#[test]
fn test_key_value_is_not_set() {
    let mut store = create_test_store();

    assert_eq!(store.get("foo"), None);
    assert_eq!(store.get_or("foo", 0), 0);
}

// == Eviction ==

#[test]
fn test_overflow_removes_earliest_used_key() {
    let mut store = create_test_store();

    store.set("foo", 1);
    store.set("bar", 2);
    store.set("baz", 3);
    store.set("buz", 4);

    assert_eq!(store.get("foo"), None);
    assert_eq!(store.get("bar"), Some(&2));
    assert_eq!(store.get("baz"), Some(&3));
    assert_eq!(store.get("buz"), Some(&4));
}

#[test]
fn test_set_same_key_does_not_remove_earliest_used_key() {
    let mut store = create_test_store();

    store.set("foo", 1);
    store.set("baz", 2);
    store.set("bar", 3);
    store.set("baz", 4);

    assert_eq!(store.get("foo"), Some(&1));
    assert_eq!(store.get("baz"), Some(&4));
    assert_eq!(store.get("bar"), Some(&3));
}

#[test]
fn test_get_moves_key_out_of_eviction() {
    let mut store = create_test_store();

    store.set("foo", 1);
    store.set("bar", 2);
    store.set("baz", 3);

    store.get("foo");
    store.set("buz", 4);

    assert_eq!(store.get("bar"), None);
    assert_eq!(store.get("foo"), Some(&1));
}

#[test]
fn test_recency_order_is_visible_through_keys() {
    let mut store = create_test_store();

    store.set(1, 1);
    store.set("two", 2);
    store.set(3, 3);
    store.get(1);

    let keys: Vec<Key> = store.keys().cloned().collect();
    assert_eq!(keys, vec![Key::from("two"), Key::from(3), Key::from(1)]);
    assert_eq!(store.peek_lru(), Some((&Key::from("two"), &2)));
}

// == Remove / Clear ==

#[test]
fn test_remove_absent_key_is_noop() {
    let mut store = create_test_store();

    store.set("foo", 1);
    store.remove("bar");

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("foo"), Some(&1));
}

#[test]
fn test_clear_forgets_every_key() {
    let mut store = create_test_store();

    store.set("foo", 1);
    store.set("bar", 2);
    store.clear();

    assert_eq!(store.get("foo"), None);
    assert_eq!(store.get("bar"), None);
    assert_eq!(store.capacity(), 3);
}

// == Dynamic Keys ==

#[test]
fn test_set_invalid_key_types() {
    let mut store = DynamicStore::new(3).unwrap();
    let invalid = [
        Value::Null,
        json!(false),
        json!(true),
        json!([]),
        json!({}),
        json!(1.23),
    ];

    for key in invalid.iter() {
        assert!(matches!(
            store.set(key, json!("bazz")),
            Err(LruError::InvalidKey(_))
        ));
        assert!(matches!(store.get(key), Err(LruError::InvalidKey(_))));
    }
    assert!(store.is_empty());
}

#[test]
fn test_null_value_is_reported_absent() {
    let mut store = DynamicStore::new(3).unwrap();

    store.set(&json!("foo"), Value::Null).unwrap();
    store.set(&json!(1), json!("one")).unwrap();

    assert!(!store.has(&json!("foo")).unwrap());
    assert!(store.has(&json!(1)).unwrap());
}

// == Shell ==

#[test]
fn test_shell_runs_script() {
    let mut store = DynamicStore::new(3).unwrap();
    let mut out = Vec::new();

    shell::run(
        &mut store,
        "set foo 1\nset baz 2\nset bar 3\nset baz 4\nget foo\nget baz\nget bar\n".as_bytes(),
        &mut out,
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "OK\nOK\nOK\nOK\n1\n4\n3\n");
}
