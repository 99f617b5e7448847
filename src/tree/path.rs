//! Path canonicalization and snapshot key utilities

use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize a path into an absolute, symlink-free form that can still be
/// opened and walked.
///
/// Uses `dunce` so Windows paths come back without the `\\?\` prefix.
pub fn canonicalize_path(path: &Path) -> io::Result<PathBuf> {
    dunce::canonicalize(path)
}

/// Strip trailing separators from a path string.
///
/// A path made only of separators collapses to a single one. Unicode is kept
/// as spelled: two names that differ only in normalization are two files.
pub fn normalize_path_string(path: &str) -> String {
    let trimmed = path.trim_end_matches(['/', '\\']);
    match (trimmed.is_empty(), path.chars().next()) {
        (true, Some(sep)) => sep.to_string(),
        _ => trimmed.to_string(),
    }
}

/// Snapshot key for a path that already lives under a canonical root.
///
/// `None` when the path is not valid UTF-8; such a path has no lossless key.
pub fn snapshot_key(path: &Path) -> Option<String> {
    path.to_str().map(normalize_path_string)
}
