//! Ignore policy for scans.
//!
//! Entries are matched by exact file name (the final path component), never by
//! pattern. Directories are always traversed; only files are ignored. The
//! baseline file name is always part of the policy used by a scan, wherever
//! the baseline itself lives, so a baseline stored inside the target tree can
//! never fingerprint itself.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// Default baseline file name, relative to the invocation directory.
pub const DEFAULT_BASELINE_NAME: &str = "baseline.json";

/// Platform metadata files that change without user intent.
pub const BUILTIN_IGNORED_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Set of file names excluded from scanning and hashing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePolicy {
    names: BTreeSet<String>,
}

impl IgnorePolicy {
    /// Policy ignoring exactly the given names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Policy that ignores nothing.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add the file name of the baseline at `baseline_path`.
    pub fn with_baseline(mut self, baseline_path: &Path) -> Self {
        if let Some(name) = baseline_path.file_name().and_then(OsStr::to_str) {
            self.names.insert(name.to_string());
        }
        self
    }

    /// Check a bare file name against the policy.
    pub fn is_ignored_name(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Check the final component of a path against the policy.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.is_ignored_name(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        IgnorePolicy::new(BUILTIN_IGNORED_NAMES.iter().copied())
            .with_baseline(Path::new(DEFAULT_BASELINE_NAME))
    }
}
