use todolist_core::{
    Item, ItemRepository, KeyValueItemRepository, KeyValueStore, MemoryKeyValueStore,
    SqliteKeyValueStore, STORAGE_KEY,
};

fn sample_items() -> Vec<Item> {
    vec![
        Item {
            id: "1000".to_string(),
            title: "Buy milk".to_string(),
            created_at: 1000,
        },
        Item {
            id: "2000".to_string(),
            title: "Write report".to_string(),
            created_at: 2000,
        },
    ]
}

#[test]
fn save_then_load_roundtrips_the_collection() {
    let mut repo = KeyValueItemRepository::new(MemoryKeyValueStore::new());
    let items = sample_items();

    repo.save(&items);

    assert_eq!(repo.load(), items);
}

#[test]
fn load_with_absent_key_returns_empty() {
    let repo = KeyValueItemRepository::new(MemoryKeyValueStore::new());

    assert!(repo.load().is_empty());
}

#[test]
fn load_with_malformed_json_returns_empty() {
    let store = MemoryKeyValueStore::with_entry(STORAGE_KEY, "not json {");
    let repo = KeyValueItemRepository::new(store);

    assert!(repo.load().is_empty());
}

#[test]
fn load_with_mismatched_shape_returns_empty() {
    // Valid JSON, wrong structure: not an array, then an array of wrong
    // objects. Both count as absent data.
    for payload in [r#"{"id":"1"}"#, r#"[{"id":1,"name":"x"}]"#, r#""todo""#] {
        let store = MemoryKeyValueStore::with_entry(STORAGE_KEY, payload);
        let repo = KeyValueItemRepository::new(store);
        assert!(repo.load().is_empty(), "payload should be discarded: {payload}");
    }
}

#[test]
fn save_overwrites_the_previous_payload() {
    let mut repo = KeyValueItemRepository::new(MemoryKeyValueStore::new());

    repo.save(&sample_items());
    repo.save(&sample_items()[..1]);

    assert_eq!(repo.load().len(), 1);
}

#[test]
fn failed_write_is_swallowed() {
    let mut store = MemoryKeyValueStore::new();
    store.fail_writes(true);
    let mut repo = KeyValueItemRepository::new(store);

    // Must not panic or error; the payload is simply dropped.
    repo.save(&sample_items());

    assert_eq!(repo.into_store().raw(STORAGE_KEY), None);
}

#[test]
fn payload_uses_the_fixed_wire_layout() {
    let mut repo = KeyValueItemRepository::new(MemoryKeyValueStore::new());
    repo.save(&sample_items());

    let store = repo.into_store();
    let payload: serde_json::Value =
        serde_json::from_str(store.raw(STORAGE_KEY).unwrap()).unwrap();

    assert_eq!(payload[0]["id"], "1000");
    assert_eq!(payload[0]["title"], "Buy milk");
    assert_eq!(payload[0]["createdAt"], 1000);
    assert!(payload[0].get("created_at").is_none());
}

#[test]
fn sqlite_store_roundtrips_values() {
    let mut store = SqliteKeyValueStore::open_in_memory().unwrap();

    assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
    store.set(STORAGE_KEY, "[]").unwrap();
    store.set(STORAGE_KEY, r#"[{"id":"1"}]"#).unwrap();

    assert_eq!(
        store.get(STORAGE_KEY).unwrap().as_deref(),
        Some(r#"[{"id":"1"}]"#)
    );
}

#[test]
fn sqlite_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.db");
    let items = sample_items();

    let mut repo = KeyValueItemRepository::new(SqliteKeyValueStore::open(&path).unwrap());
    repo.save(&items);
    drop(repo);

    let repo = KeyValueItemRepository::new(SqliteKeyValueStore::open(&path).unwrap());
    assert_eq!(repo.load(), items);
}
