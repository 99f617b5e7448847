//! Baseline Store
//!
//! Persists a Snapshot as the trusted reference state and reads it back.

pub mod persistence;

pub use persistence::JsonBaselineStore;

use crate::error::StoreError;
use crate::types::Snapshot;
use std::path::Path;

/// Baseline storage interface
pub trait SnapshotStore {
    /// Where the baseline lives
    fn location(&self) -> &Path;

    /// Whether a baseline has been written yet
    ///
    /// Callers that need to tell "no baseline" apart from "empty baseline"
    /// check this before `load`.
    fn exists(&self) -> bool;

    /// Replace the stored baseline with `snapshot`
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Read the stored baseline; a missing baseline loads as an empty snapshot
    fn load(&self) -> Result<Snapshot, StoreError>;
}

/// Save `snapshot` as a JSON baseline at `path`.
pub fn save(snapshot: &Snapshot, path: &Path) -> Result<(), StoreError> {
    JsonBaselineStore::new(path).save(snapshot)
}

/// Load the JSON baseline at `path`.
pub fn load(path: &Path) -> Result<Snapshot, StoreError> {
    JsonBaselineStore::new(path).load()
}
