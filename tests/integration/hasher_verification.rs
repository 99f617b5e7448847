//! Hasher Implementation Verification Tests
//!
//! Checks file fingerprints against known SHA-256 vectors and the sha2 crate.

use sentinel::tree::hasher::{hash_bytes, hash_file, HashOutcome};
use sentinel::types::SkipReason;
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_fingerprint_matches_sha256() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("hello.txt");
    fs::write(&file, "hello world").unwrap();

    let outcome = hash_file(&file);
    let fingerprint = outcome.fingerprint().expect("file should hash");
    assert_eq!(
        fingerprint.as_str(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn test_empty_file_fingerprint() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("empty");
    fs::write(&file, "").unwrap();

    assert_eq!(
        hash_file(&file).fingerprint().unwrap().as_str(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_large_file_is_streamed_to_same_digest() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("large.bin");
    let content: Vec<u8> = (0..1_000_003u32).map(|i| (i % 251) as u8).collect();
    fs::write(&file, &content).unwrap();

    let expected = hex::encode(Sha256::digest(&content));
    assert_eq!(hash_file(&file).fingerprint().unwrap().as_str(), expected);
    assert_eq!(hash_bytes(&content).as_str(), expected);
}

#[test]
fn test_identical_content_in_different_files_matches() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "same").unwrap();
    fs::write(&b, "same").unwrap();

    assert_eq!(hash_file(&a), hash_file(&b));
}

#[test]
fn test_missing_file_is_skipped_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let outcome = hash_file(&temp_dir.path().join("missing"));
    assert_eq!(outcome, HashOutcome::Skipped(SkipReason::NotFound));
}
