use super::*;
use tempfile::TempDir;

#[test]
fn test_cache_paths_live_under_root() {
    let root = cache_root();
    assert!(root.ends_with("draft-board"));
    assert_eq!(id_cache_path().parent(), Some(root.as_path()));
    assert_eq!(database_path().file_name().unwrap(), "draft.db");
}

#[test]
fn test_write_and_read_string() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("file.txt");

    write_string(&path, "hello board").unwrap();
    assert_eq!(try_read_to_string(&path).as_deref(), Some("hello board"));
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(try_read_to_string(&dir.path().join("nope.json")).is_none());
}

#[test]
fn test_id_cache_roundtrip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.json");

    let mut cache = IdCache::default();
    cache.insert("Josh Allen", EspnId::new(3128390));
    cache.insert("Ja'Marr Chase", EspnId::new(4431750));
    cache.save(&path).unwrap();

    let loaded = IdCache::load(&path);
    assert_eq!(loaded, cache);
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_id_cache_lookup_is_normalised() {
    let mut cache = IdCache::default();
    cache.insert("A.J. Brown", EspnId::new(4047646));

    assert_eq!(cache.get("AJ Brown"), Some(EspnId::new(4047646)));
    assert_eq!(cache.get("aj brown"), Some(EspnId::new(4047646)));
    assert_eq!(cache.get("Marquise Brown"), None);
}

#[test]
fn test_id_cache_corrupt_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ids.json");
    write_string(&path, "{not json").unwrap();

    assert!(IdCache::load(&path).is_empty());
}
