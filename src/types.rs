//! Core types for the Sentinel file integrity monitor.

use crate::error::FingerprintError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::str::FromStr;

/// Length of a fingerprint in hex characters (SHA-256 = 32 bytes)
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Fingerprint: lowercase hex SHA-256 digest of a file's full content
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Build a fingerprint from raw digest bytes.
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        debug_assert_eq!(digest.len() * 2, FINGERPRINT_HEX_LEN);
        Fingerprint(hex::encode(digest))
    }

    /// Parse a stored fingerprint, rejecting anything but 64 lowercase hex characters.
    pub fn parse(value: &str) -> Result<Self, FingerprintError> {
        if value.len() != FINGERPRINT_HEX_LEN {
            return Err(FingerprintError::Length {
                expected: FINGERPRINT_HEX_LEN,
                actual: value.len(),
            });
        }
        if let Some(bad) = value
            .chars()
            .find(|c| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(FingerprintError::Character(bad));
        }
        Ok(Fingerprint(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters, for compact display.
    pub fn short(&self) -> &str {
        &self.0[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fingerprint::parse(s)
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = FingerprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Fingerprint::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

/// Snapshot: normalized absolute path -> fingerprint for one scan of a tree
///
/// Backed by an ordered map, so iteration is always in path order. Each scan
/// builds a new snapshot; stored snapshots are never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, Fingerprint>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fingerprint for a path, returning the previous one if any.
    pub fn insert(&mut self, path: impl Into<String>, fingerprint: Fingerprint) -> Option<Fingerprint> {
        self.entries.insert(path.into(), fingerprint)
    }

    pub fn get(&self, path: &str) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fingerprint)> {
        self.entries.iter().map(|(path, fp)| (path.as_str(), fp))
    }

    /// Paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Fingerprint)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Fingerprint)>>(iter: I) -> Self {
        Snapshot {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Kind of change between a baseline and a fresh scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    New,
    Modified,
    Deleted,
}

impl ChangeKind {
    /// Upper-case tag used in alert lines.
    pub fn tag(&self) -> &'static str {
        match self {
            ChangeKind::New => "NEW",
            ChangeKind::Modified => "MODIFIED",
            ChangeKind::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One classified difference for a single path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeRecord {
    New {
        path: String,
    },
    Modified {
        path: String,
        old: Fingerprint,
        new: Fingerprint,
    },
    Deleted {
        path: String,
    },
}

impl ChangeRecord {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeRecord::New { .. } => ChangeKind::New,
            ChangeRecord::Modified { .. } => ChangeKind::Modified,
            ChangeRecord::Deleted { .. } => ChangeKind::Deleted,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ChangeRecord::New { path }
            | ChangeRecord::Modified { path, .. }
            | ChangeRecord::Deleted { path } => path,
        }
    }
}

/// Why a filesystem entry was left out of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Entry vanished between listing and opening
    NotFound,
    PermissionDenied,
    /// Socket, fifo, device, or a symlink that does not lead to a regular file
    NotRegularFile,
    /// Name cannot be stored as a baseline key
    NonUtf8Path,
    /// Directory traversal failed at this entry
    Walk(String),
    /// Any other read failure
    Io(String),
}

impl SkipReason {
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SkipReason::NotFound,
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            _ => SkipReason::Io(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => f.write_str("not found"),
            SkipReason::PermissionDenied => f.write_str("permission denied"),
            SkipReason::NotRegularFile => f.write_str("not a regular file"),
            SkipReason::NonUtf8Path => f.write_str("path is not valid UTF-8"),
            SkipReason::Walk(detail) => write!(f, "traversal failed: {}", detail),
            SkipReason::Io(detail) => write!(f, "read failed: {}", detail),
        }
    }
}
