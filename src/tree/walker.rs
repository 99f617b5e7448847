//! Filesystem walker for enumerating the files of a scan target

use crate::ignore::IgnorePolicy;
use crate::types::SkipReason;
use std::fs;
use std::path::PathBuf;
use tracing::trace;
use walkdir::WalkDir;

/// Filesystem entry produced by a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A regular file to fingerprint, with its size at listing time
    File { path: PathBuf, size: u64 },
    /// A file whose name is in the ignore policy
    Ignored { path: PathBuf },
    /// An entry that could not be listed or does not resolve to a regular file
    Skipped { path: PathBuf, reason: SkipReason },
}

impl Entry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Entry::File { path, .. } | Entry::Ignored { path } | Entry::Skipped { path, .. } => {
                path
            }
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// File names to leave out
    pub ignore: IgnorePolicy,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore: IgnorePolicy::default(),
            max_depth: None,
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect every non-directory entry.
    ///
    /// Directories are descended into but not reported. Traversal errors
    /// (unreadable directories, symlink loops when following links) become
    /// `Entry::Skipped` and the walk carries on. Siblings are visited in file
    /// name order. When links are not followed, a symlink to a regular file is
    /// still listed as a file.
    pub fn walk(&self) -> Vec<Entry> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| self.root.clone());
                    let reason = if e.loop_ancestor().is_some() {
                        SkipReason::Walk("filesystem loop".to_string())
                    } else {
                        match e.io_error() {
                            Some(io_err) => match SkipReason::from_io(io_err) {
                                SkipReason::Io(detail) => SkipReason::Walk(detail),
                                other => other,
                            },
                            None => SkipReason::Walk(e.to_string()),
                        }
                    };
                    entries.push(Entry::Skipped { path, reason });
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }

            let path = entry.path().to_path_buf();

            if self.config.ignore.is_ignored_name(entry.file_name()) {
                trace!(path = %path.display(), "Ignored by policy");
                entries.push(Entry::Ignored { path });
                continue;
            }

            if file_type.is_symlink() {
                entries.push(resolve_symlink(path));
                continue;
            }

            if !file_type.is_file() {
                entries.push(Entry::Skipped {
                    path,
                    reason: SkipReason::NotRegularFile,
                });
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => entries.push(Entry::File {
                    path,
                    size: metadata.len(),
                }),
                Err(e) => {
                    let reason = e
                        .io_error()
                        .map(SkipReason::from_io)
                        .unwrap_or_else(|| SkipReason::Walk(e.to_string()));
                    entries.push(Entry::Skipped { path, reason });
                }
            }
        }

        entries
    }
}

/// Entry for a symlink met while not following links.
///
/// A link to a regular file is listed under the link's own path and hashed
/// through it. Links to directories are not descended into.
fn resolve_symlink(path: PathBuf) -> Entry {
    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_file() => Entry::File {
            path,
            size: metadata.len(),
        },
        Ok(_) => Entry::Skipped {
            path,
            reason: SkipReason::NotRegularFile,
        },
        Err(e) => Entry::Skipped {
            path,
            reason: SkipReason::from_io(&e),
        },
    }
}
