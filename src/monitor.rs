//! Monitor: the initialize and check workflows
//!
//! Wires the scanner to a baseline store (initialize) or to the store and the
//! differ (check). Holds no state between runs; every call scans afresh.

use crate::config::SentinelConfig;
use crate::diff::{self, DiffSummary};
use crate::error::MonitorError;
use crate::store::{JsonBaselineStore, SnapshotStore};
use crate::tree::scanner::{ScanOptions, ScanReport, Scanner};
use crate::types::ChangeRecord;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything a monitor needs for one target
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub target: PathBuf,
    pub baseline_path: PathBuf,
    pub scan: ScanOptions,
}

impl MonitorSettings {
    /// Settings for `target` using the baseline and scan sections of `config`.
    pub fn from_config(target: impl Into<PathBuf>, config: &SentinelConfig) -> Self {
        let baseline_path = config.baseline.path.clone();
        Self {
            target: target.into(),
            scan: config.scan.scan_options(&baseline_path),
            baseline_path,
        }
    }
}

/// Result of writing a new baseline
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub baseline_path: PathBuf,
    pub files: usize,
    pub report: ScanReport,
}

/// Result of checking a target against its baseline
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub baseline_path: PathBuf,
    pub baseline_files: usize,
    pub changes: Vec<ChangeRecord>,
    pub summary: DiffSummary,
    pub report: ScanReport,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

/// File integrity monitor for one target and one baseline store
pub struct Monitor<S: SnapshotStore = JsonBaselineStore> {
    target: PathBuf,
    scanner: Scanner,
    store: S,
}

impl Monitor<JsonBaselineStore> {
    pub fn new(settings: MonitorSettings) -> Self {
        let store = JsonBaselineStore::new(&settings.baseline_path);
        Monitor::with_store(settings.target, settings.scan, store)
    }
}

impl<S: SnapshotStore> Monitor<S> {
    /// Monitor backed by an arbitrary store. The store's file name is added
    /// to the ignore policy.
    pub fn with_store(target: impl Into<PathBuf>, mut scan: ScanOptions, store: S) -> Self {
        scan.ignore = scan.ignore.with_baseline(store.location());
        Self {
            target: target.into(),
            scanner: Scanner::new(scan),
            store,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scan the target and replace the baseline with the result.
    pub fn initialize(&self) -> Result<InitOutcome, MonitorError> {
        let tree = self.scanner.scan(&self.target)?;
        self.store.save(&tree.snapshot)?;

        info!(
            target = %tree.report.root.display(),
            baseline = %self.store.location().display(),
            files = tree.snapshot.len(),
            "Baseline initialized"
        );

        Ok(InitOutcome {
            baseline_path: self.store.location().to_path_buf(),
            files: tree.snapshot.len(),
            report: tree.report,
        })
    }

    /// Compare a fresh scan of the target against the stored baseline.
    ///
    /// A baseline that was never written is `MonitorError::BaselineMissing`;
    /// an existing but empty baseline is compared like any other.
    pub fn check(&self) -> Result<CheckOutcome, MonitorError> {
        if !self.store.exists() {
            return Err(MonitorError::BaselineMissing(
                self.store.location().to_path_buf(),
            ));
        }

        let baseline = self.store.load()?;
        let tree = self.scanner.scan(&self.target)?;
        let changes = diff::compare(&baseline, &tree.snapshot);
        let summary = DiffSummary::from_records(&changes);

        info!(
            target = %tree.report.root.display(),
            baseline_files = baseline.len(),
            current_files = tree.snapshot.len(),
            changes = changes.len(),
            "Integrity check complete"
        );

        Ok(CheckOutcome {
            baseline_path: self.store.location().to_path_buf(),
            baseline_files: baseline.len(),
            changes,
            summary,
            report: tree.report,
        })
    }
}
