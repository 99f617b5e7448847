//! Directory tree scanning
//!
//! Walks a target directory, fingerprints every regular file, and produces a
//! Snapshot keyed by normalized absolute path.

pub mod hasher;
pub mod path;
pub mod scanner;
pub mod walker;
