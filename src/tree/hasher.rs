//! Content fingerprinting using SHA-256

use crate::types::{Fingerprint, SkipReason};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read buffer size for streaming file content into the digest
pub const CHUNK_SIZE: usize = 4096;

/// Result of fingerprinting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutcome {
    Hashed(Fingerprint),
    Skipped(SkipReason),
}

impl HashOutcome {
    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            HashOutcome::Hashed(fp) => Some(fp),
            HashOutcome::Skipped(_) => None,
        }
    }
}

/// Fingerprint a file by streaming it through SHA-256.
///
/// Read failures never propagate: a file that disappeared or cannot be
/// opened comes back as `Skipped` with the reason. The handle is dropped
/// before this returns.
pub fn hash_file(path: &Path) -> HashOutcome {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return HashOutcome::Skipped(SkipReason::from_io(&e)),
    };

    match hash_reader(file) {
        Ok(fp) => HashOutcome::Hashed(fp),
        Err(e) => HashOutcome::Skipped(SkipReason::from_io(&e)),
    }
}

/// Fingerprint everything a reader yields, in `CHUNK_SIZE` pieces.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<Fingerprint> {
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(Fingerprint::from_digest(&hasher.finalize()))
}

/// Fingerprint an in-memory buffer
pub fn hash_bytes(content: &[u8]) -> Fingerprint {
    Fingerprint::from_digest(&Sha256::digest(content))
}
