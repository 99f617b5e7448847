//! Properties of snapshot comparison and baseline persistence

use proptest::prelude::*;
use sentinel::diff::compare;
use sentinel::store::{load, save};
use sentinel::tree::hasher::hash_bytes;
use sentinel::types::{ChangeKind, Snapshot};
use std::collections::BTreeSet;
use tempfile::TempDir;

fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    prop::collection::btree_map("/[a-e]{1,3}(/[a-e]{1,3})?", any::<u8>(), 0..16).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(path, seed)| (path, hash_bytes(&[seed])))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn compare_with_itself_is_empty(snapshot in snapshot_strategy()) {
        prop_assert!(compare(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn each_path_reported_at_most_once(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let records = compare(&baseline, &current);
        let paths: BTreeSet<&str> = records.iter().map(|r| r.path()).collect();
        prop_assert_eq!(paths.len(), records.len());
    }

    #[test]
    fn deletions_come_last(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let records = compare(&baseline, &current);
        let first_deleted = records
            .iter()
            .position(|r| r.kind() == ChangeKind::Deleted)
            .unwrap_or(records.len());
        prop_assert!(records[first_deleted..]
            .iter()
            .all(|r| r.kind() == ChangeKind::Deleted));
    }

    #[test]
    fn records_account_for_every_difference(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        for record in compare(&baseline, &current) {
            let path = record.path();
            match record.kind() {
                ChangeKind::New => prop_assert!(!baseline.contains(path) && current.contains(path)),
                ChangeKind::Deleted => prop_assert!(baseline.contains(path) && !current.contains(path)),
                ChangeKind::Modified => prop_assert_ne!(baseline.get(path), current.get(path)),
            }
        }
    }

    #[test]
    fn every_difference_has_a_record(
        baseline in snapshot_strategy(),
        current in snapshot_strategy(),
    ) {
        let records = compare(&baseline, &current);
        let kind_of = |path: &str| {
            records
                .iter()
                .find(|r| r.path() == path)
                .map(|r| r.kind())
        };

        for (path, fingerprint) in current.iter() {
            let expected = match baseline.get(path) {
                None => Some(ChangeKind::New),
                Some(previous) if previous != fingerprint => Some(ChangeKind::Modified),
                Some(_) => None,
            };
            prop_assert_eq!(kind_of(path), expected);
        }
        for path in baseline.paths().filter(|p| !current.contains(p)) {
            prop_assert_eq!(kind_of(path), Some(ChangeKind::Deleted));
        }

        let changed = current
            .iter()
            .filter(|(path, fp)| baseline.get(path) != Some(*fp))
            .count()
            + baseline.paths().filter(|p| !current.contains(p)).count();
        prop_assert_eq!(records.len(), changed);
    }

    #[test]
    fn saved_baseline_loads_back(snapshot in snapshot_strategy()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("baseline.json");
        save(&snapshot, &path).unwrap();
        prop_assert_eq!(load(&path).unwrap(), snapshot);
    }
}
