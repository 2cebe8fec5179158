use super::*;

#[test]
fn test_storage_key() {
    assert_eq!(storage_key("rain", "deposit"), "flow-diagram-v2-rain-deposit");
}

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.load("k").unwrap(), None);
    store.save("k", "v").unwrap();
    assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
    store.remove("k").unwrap();
    assert_eq!(store.load("k").unwrap(), None);
}

#[test]
fn test_json_dir_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonDirStore::new(dir.path().join("nested"));
    assert_eq!(store.load("k").unwrap(), None);
    store.save("k", "{}").unwrap();
    assert!(dir.path().join("nested").join("k.json").exists());
    assert_eq!(store.load("k").unwrap().as_deref(), Some("{}"));
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.load("k").unwrap(), None);
}
