//! Integration tests for the JSON baseline store

use sentinel::error::StoreError;
use sentinel::store::{self, JsonBaselineStore, SnapshotStore};
use sentinel::tree::scanner::{scan, ScanOptions};
use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::write_tree;

#[test]
fn test_scanned_snapshot_survives_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    write_tree(&target, &[("a.txt", "alpha"), ("deep/b.txt", "beta")]);

    let snapshot = scan(&target, &ScanOptions::default()).unwrap().snapshot;
    let baseline = temp_dir.path().join("baseline.json");

    store::save(&snapshot, &baseline).unwrap();
    assert_eq!(store::load(&baseline).unwrap(), snapshot);
}

#[test]
fn test_baseline_file_is_a_flat_json_object() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    write_tree(&target, &[("hello.txt", "hello world")]);

    let snapshot = scan(&target, &ScanOptions::default()).unwrap().snapshot;
    let baseline = temp_dir.path().join("baseline.json");
    store::save(&snapshot, &baseline).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&baseline).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    let (key, fingerprint) = object.iter().next().unwrap();
    assert!(key.ends_with("hello.txt"));
    assert_eq!(
        fingerprint.as_str().unwrap(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn test_missing_baseline_loads_empty_but_does_not_exist() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonBaselineStore::new(temp_dir.path().join("none.json"));

    assert!(!store.exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_hand_edited_baseline_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let baseline = temp_dir.path().join("baseline.json");
    fs::write(&baseline, r#"{"/etc/passwd": "not-a-digest"}"#).unwrap();

    let err = store::load(&baseline).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { ref path, .. } if *path == baseline));
}
