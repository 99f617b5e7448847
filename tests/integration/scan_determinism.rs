//! Scan determinism and key normalization tests

use sentinel::tree::path::{canonicalize_path, snapshot_key};
use sentinel::tree::scanner::{scan, ScanOptions};
use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::write_tree;

#[test]
fn test_repeated_scans_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("a.txt", "alpha"),
            ("dir/b.txt", "beta"),
            ("dir/nested/c.txt", "gamma"),
        ],
    );

    let first = scan(temp_dir.path(), &ScanOptions::default()).unwrap();
    let second = scan(temp_dir.path(), &ScanOptions::default()).unwrap();

    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(first.snapshot.len(), 3);
}

#[test]
fn test_different_spellings_of_root_produce_same_keys() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("sub/file.txt", "x"), ("top.txt", "y")]);

    let direct = scan(temp_dir.path(), &ScanOptions::default()).unwrap();
    let roundabout = scan(
        &temp_dir.path().join("sub").join(".."),
        &ScanOptions::default(),
    )
    .unwrap();

    assert_eq!(direct.snapshot, roundabout.snapshot);
}

#[test]
fn test_keys_are_absolute_and_sorted() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("b.txt", "2"), ("a.txt", "1"), ("c/d.txt", "3")]);

    let tree = scan(temp_dir.path(), &ScanOptions::default()).unwrap();
    let keys: Vec<&str> = tree.snapshot.paths().collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let root = canonicalize_path(temp_dir.path()).unwrap();
    assert_eq!(keys[0], snapshot_key(&root.join("a.txt")).unwrap());
    assert!(keys.iter().all(|k| std::path::Path::new(k).is_absolute()));
}

#[test]
fn test_directories_and_ignored_names_are_not_entries() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("keep.txt", "keep"),
            (".DS_Store", "finder"),
            ("baseline.json", "{}"),
        ],
    );
    fs::create_dir(temp_dir.path().join("empty_dir")).unwrap();

    let tree = scan(temp_dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(tree.snapshot.len(), 1);
    assert_eq!(tree.report.files_ignored, 2);
    assert!(tree.snapshot.paths().all(|k| k.ends_with("keep.txt")));
}

#[test]
fn test_empty_directory_scans_to_empty_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let tree = scan(temp_dir.path(), &ScanOptions::default()).unwrap();
    assert!(tree.snapshot.is_empty());
    assert!(tree.report.skipped.is_empty());
}
