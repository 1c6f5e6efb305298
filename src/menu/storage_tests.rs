use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_storage_path_returns_config_path() {
    let path = storage_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/chisha"));
    assert!(path.to_string_lossy().ends_with("storage.json"));
}

#[test]
fn test_file_store_missing_file_reads_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("storage.json"));
    assert!(store.get("chisha_items").unwrap().is_none());
}

#[test]
fn test_file_store_set_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(temp_dir.path().join("storage.json"));

    store.set("chisha_items", r#"["火锅"]"#).unwrap();

    assert_eq!(
        store.get("chisha_items").unwrap(),
        Some(r#"["火锅"]"#.to_string())
    );
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("storage.json");
    let mut store = JsonFileStore::new(&path);

    store.set("k", "v").unwrap();

    assert!(path.exists());
}

#[test]
fn test_file_store_keeps_other_keys() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(temp_dir.path().join("storage.json"));

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.set("a", "3").unwrap();

    assert_eq!(store.get("a").unwrap(), Some("3".to_string()));
    assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
}

#[test]
fn test_file_store_corrupt_file_is_error_on_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, "not json {").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.get("k"), Err(StorageError::Corrupt(_))));
}

#[test]
fn test_file_store_overwrites_corrupt_file_on_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, "not json {").unwrap();

    let mut store = JsonFileStore::new(&path);
    store.set("k", "v").unwrap();

    assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
}

#[test]
fn test_file_store_empty_file_reads_none() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");
    fs::write(&path, "").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn test_memory_store_counts_writes() {
    let mut store = MemoryStore::new();
    assert_eq!(store.writes(), 0);

    store.set("k", "v").unwrap();
    store.set("k", "w").unwrap();

    assert_eq!(store.writes(), 2);
    assert_eq!(store.get("k").unwrap(), Some("w".to_string()));
}

#[test]
fn test_memory_store_with_entry() {
    let store = MemoryStore::with_entry("k", "v");
    assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    assert_eq!(store.writes(), 0);
}
