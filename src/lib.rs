//! Sentinel: File Integrity Monitoring
//!
//! Records a SHA-256 fingerprint for every regular file under a target
//! directory, stores the result as a trusted JSON baseline, and later reports
//! which files were created, modified, or deleted relative to it.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod ignore;
pub mod logging;
pub mod monitor;
pub mod store;
pub mod tree;
pub mod types;

pub use diff::{compare, DiffSummary};
pub use error::{MonitorError, ScanError, SentinelError, StoreError};
pub use monitor::{CheckOutcome, InitOutcome, Monitor, MonitorSettings};
pub use store::{load, save, JsonBaselineStore, SnapshotStore};
pub use tree::hasher::{hash_file, HashOutcome};
pub use tree::scanner::{scan, ScanOptions, ScanReport, ScannedTree, Scanner};
pub use types::{ChangeKind, ChangeRecord, Fingerprint, SkipReason, Snapshot};
