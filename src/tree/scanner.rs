//! Tree scanner: walk a target, fingerprint every file, build a Snapshot

use crate::error::ScanError;
use crate::ignore::IgnorePolicy;
use crate::tree::hasher::{self, HashOutcome};
use crate::tree::path;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use crate::types::{SkipReason, Snapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Options for one scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub ignore: IgnorePolicy,
    pub follow_symlinks: bool,
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore: IgnorePolicy::default(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// An entry that was left out of the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Statistics and skips for one scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Canonical root that was walked
    pub root: PathBuf,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub files_hashed: usize,
    pub files_ignored: usize,
    pub bytes_hashed: u64,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanReport {
    fn new(root: PathBuf, started_at: DateTime<Utc>) -> Self {
        Self {
            root,
            started_at,
            elapsed: Duration::ZERO,
            files_hashed: 0,
            files_ignored: 0,
            bytes_hashed: 0,
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        warn!(path = %path.display(), reason = %reason, "Skipping entry");
        self.skipped.push(SkippedEntry { path, reason });
    }

    /// Skipped entries whose reason is a permission failure.
    pub fn permission_denied(&self) -> impl Iterator<Item = &SkippedEntry> {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::PermissionDenied)
    }
}

/// Snapshot together with the report of the scan that produced it
#[derive(Debug, Clone)]
pub struct ScannedTree {
    pub snapshot: Snapshot,
    pub report: ScanReport,
}

/// Sequential scanner over one directory tree at a time
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` and return the snapshot plus report.
    ///
    /// `root` may be relative; it is canonicalized before walking so keys are
    /// absolute and independent of the working directory. A missing root is
    /// `ScanError::TargetMissing`, never an empty snapshot.
    pub fn scan(&self, root: &Path) -> Result<ScannedTree, ScanError> {
        let started_at = Utc::now();
        let timer = Instant::now();

        let canonical_root = path::canonicalize_path(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::TargetMissing(root.to_path_buf()),
            _ => ScanError::InvalidPath(format!(
                "Failed to canonicalize {}: {}",
                root.display(),
                e
            )),
        })?;

        if !canonical_root.is_dir() {
            return Err(ScanError::NotADirectory(canonical_root));
        }

        debug!(
            root = %canonical_root.display(),
            ignore = ?self.options.ignore.names().collect::<Vec<_>>(),
            "Starting scan"
        );

        let walker = Walker::with_config(
            canonical_root.clone(),
            WalkerConfig {
                follow_symlinks: self.options.follow_symlinks,
                ignore: self.options.ignore.clone(),
                max_depth: self.options.max_depth,
            },
        );

        let mut snapshot = Snapshot::new();
        let mut report = ScanReport::new(canonical_root, started_at);

        for entry in walker.walk() {
            match entry {
                Entry::File { path, size } => {
                    let Some(key) = path::snapshot_key(&path) else {
                        report.skip(path, SkipReason::NonUtf8Path);
                        continue;
                    };
                    match hasher::hash_file(&path) {
                        HashOutcome::Hashed(fingerprint) => {
                            debug!(path = %key, fingerprint = %fingerprint.short(), "Hashed file");
                            snapshot.insert(key, fingerprint);
                            report.files_hashed += 1;
                            report.bytes_hashed += size;
                        }
                        HashOutcome::Skipped(reason) => report.skip(path, reason),
                    }
                }
                Entry::Ignored { .. } => report.files_ignored += 1,
                Entry::Skipped { path, reason } => report.skip(path, reason),
            }
        }

        report.elapsed = timer.elapsed();
        info!(
            root = %report.root.display(),
            files = snapshot.len(),
            ignored = report.files_ignored,
            skipped = report.skipped.len(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Scan complete"
        );

        Ok(ScannedTree { snapshot, report })
    }

    /// Scan `root` and keep only the snapshot.
    pub fn snapshot(&self, root: &Path) -> Result<Snapshot, ScanError> {
        self.scan(root).map(|tree| tree.snapshot)
    }
}

/// Scan `root` with the given options.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScannedTree, ScanError> {
    Scanner::new(options.clone()).scan(root)
}
