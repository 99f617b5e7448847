//! JSON file persistence for baselines

use crate::error::StoreError;
use crate::store::SnapshotStore;
use crate::types::Snapshot;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Baseline stored as a pretty-printed JSON object of path -> fingerprint
#[derive(Debug, Clone)]
pub struct JsonBaselineStore {
    path: PathBuf,
}

impl JsonBaselineStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Sibling path used while writing
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl SnapshotStore for JsonBaselineStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the baseline atomically
    ///
    /// Uses temporary file + rename so readers see either the old or the new
    /// baseline, never a partial one.
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
            }
        }

        let mut serialized = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        serialized.push('\n');

        let temp_path = self.temp_path();
        let write_result = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(serialized.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(self.io_error(&temp_path, e));
        }

        // Atomically rename temp file to final location
        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Clean up temp file on error
            let _ = fs::remove_file(&temp_path);
            self.io_error(&self.path, e)
        })?;

        info!(path = %self.path.display(), files = snapshot.len(), "Baseline saved");
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No baseline on disk");
                return Ok(Snapshot::new());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(StoreError::Malformed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|e| StoreError::Malformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        info!(path = %self.path.display(), files = snapshot.len(), "Baseline loaded");
        Ok(snapshot)
    }
}
