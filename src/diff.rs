//! Snapshot comparison
//!
//! Classifies every path that differs between a baseline and a fresh scan.
//! Records for paths in the current scan (new, then modified, interleaved in
//! path order) come first, followed by deletions in path order. Unchanged
//! paths produce nothing.

use crate::types::{ChangeKind, ChangeRecord, Snapshot};
use serde::Serialize;
use tracing::info;

/// Compare a baseline against a current snapshot.
pub fn compare(baseline: &Snapshot, current: &Snapshot) -> Vec<ChangeRecord> {
    let mut records = Vec::new();

    for (path, fingerprint) in current.iter() {
        match baseline.get(path) {
            None => records.push(ChangeRecord::New {
                path: path.to_string(),
            }),
            Some(previous) if previous != fingerprint => records.push(ChangeRecord::Modified {
                path: path.to_string(),
                old: previous.clone(),
                new: fingerprint.clone(),
            }),
            Some(_) => {}
        }
    }

    for path in baseline.paths() {
        if !current.contains(path) {
            records.push(ChangeRecord::Deleted {
                path: path.to_string(),
            });
        }
    }

    let summary = DiffSummary::from_records(&records);
    info!(
        new = summary.new,
        modified = summary.modified,
        deleted = summary.deleted,
        "Comparison complete"
    );

    records
}

/// Per-kind counts of a comparison
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub new: usize,
    pub modified: usize,
    pub deleted: usize,
}

impl DiffSummary {
    pub fn from_records(records: &[ChangeRecord]) -> Self {
        records
            .iter()
            .fold(DiffSummary::default(), |mut summary, record| {
                match record.kind() {
                    ChangeKind::New => summary.new += 1,
                    ChangeKind::Modified => summary.modified += 1,
                    ChangeKind::Deleted => summary.deleted += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.new + self.modified + self.deleted
    }
}
