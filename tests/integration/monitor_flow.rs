//! End-to-end initialize and check workflows against a real directory

use sentinel::config::SentinelConfig;
use sentinel::error::MonitorError;
use sentinel::monitor::{Monitor, MonitorSettings};
use sentinel::store::SnapshotStore;
use sentinel::tree::path::{canonicalize_path, snapshot_key};
use sentinel::types::ChangeRecord;
use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::write_tree;

fn monitor_for(temp_dir: &TempDir) -> Monitor {
    let mut config = SentinelConfig::default();
    config.baseline.path = temp_dir.path().join("state").join("baseline.json");
    Monitor::new(MonitorSettings::from_config(
        temp_dir.path().join("target"),
        &config,
    ))
}

#[test]
fn test_untouched_tree_reports_no_alerts() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(&temp_dir.path().join("target"), &[("a", "1"), ("b/c", "2")]);
    let monitor = monitor_for(&temp_dir);

    monitor.initialize().unwrap();
    let outcome = monitor.check().unwrap();

    assert!(outcome.is_clean());
    assert_eq!(outcome.baseline_files, 2);
    assert_eq!(outcome.report.files_hashed, 2);
}

#[test]
fn test_every_kind_of_change_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    write_tree(&target, &[("keep", "k"), ("edit", "before"), ("gone", "g")]);
    let monitor = monitor_for(&temp_dir);
    monitor.initialize().unwrap();

    fs::write(target.join("edit"), "after").unwrap();
    fs::remove_file(target.join("gone")).unwrap();
    fs::write(target.join("added"), "new").unwrap();

    let outcome = monitor.check().unwrap();
    let root = canonicalize_path(&target).unwrap();
    let key = |name: &str| snapshot_key(&root.join(name)).unwrap();

    assert_eq!(outcome.changes.len(), 3);
    assert_eq!(
        outcome.changes[0],
        ChangeRecord::New { path: key("added") }
    );
    assert!(matches!(
        &outcome.changes[1],
        ChangeRecord::Modified { path, old, new } if *path == key("edit") && old != new
    ));
    assert_eq!(outcome.changes[2], ChangeRecord::Deleted { path: key("gone") });
}

#[test]
fn test_reinitialize_accepts_current_state() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    write_tree(&target, &[("a", "1")]);
    let monitor = monitor_for(&temp_dir);
    monitor.initialize().unwrap();

    fs::write(target.join("a"), "2").unwrap();
    assert_eq!(monitor.check().unwrap().summary.modified, 1);

    monitor.initialize().unwrap();
    assert!(monitor.check().unwrap().is_clean());
}

#[test]
fn test_corrupted_baseline_fails_check() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(&temp_dir.path().join("target"), &[("a", "1")]);
    let monitor = monitor_for(&temp_dir);
    monitor.initialize().unwrap();

    fs::write(monitor.store().location(), "{ truncated").unwrap();
    assert!(matches!(monitor.check(), Err(MonitorError::Store(_))));
}

#[test]
fn test_unicode_twin_of_baselined_file_is_reported_new() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    write_tree(&target, &[("caf\u{e9}.txt", "original")]);
    let monitor = monitor_for(&temp_dir);
    monitor.initialize().unwrap();

    fs::write(target.join("cafe\u{0301}.txt"), "twin").unwrap();
    // Filesystems that fold normalization store the twin over the original.
    if fs::read_dir(&target).unwrap().count() < 2 {
        return;
    }

    let outcome = monitor.check().unwrap();
    let root = canonicalize_path(&target).unwrap();
    assert_eq!(
        outcome.changes,
        vec![ChangeRecord::New {
            path: snapshot_key(&root.join("cafe\u{0301}.txt")).unwrap()
        }]
    );
}

#[cfg(unix)]
#[test]
fn test_tampering_behind_symlink_is_reported_modified() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("target");
    fs::create_dir_all(&target).unwrap();
    let real = temp_dir.path().join("real.conf");
    fs::write(&real, "listen = 80").unwrap();
    std::os::unix::fs::symlink(&real, target.join("app.conf")).unwrap();

    let monitor = monitor_for(&temp_dir);
    assert_eq!(monitor.initialize().unwrap().files, 1);

    fs::write(&real, "listen = 8080").unwrap();
    let outcome = monitor.check().unwrap();
    let root = canonicalize_path(&target).unwrap();

    assert_eq!(outcome.changes.len(), 1);
    assert!(matches!(
        &outcome.changes[0],
        ChangeRecord::Modified { path, .. } if *path == snapshot_key(&root.join("app.conf")).unwrap()
    ));
}
