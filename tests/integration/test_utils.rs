//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Write `files` (relative path, contents) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

/// Sandbox for running the binary: isolated home and config dirs plus a
/// working directory.
pub struct CliSandbox {
    pub dir: TempDir,
}

impl CliSandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        Self { dir }
    }

    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Run `sentinel` with `args` from the sandbox working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_in(&self.work_dir(), args)
    }

    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_sentinel"))
            .current_dir(cwd)
            .env("HOME", self.dir.path().join("home"))
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env_remove("SENTINEL_LOG")
            .env_remove("SENTINEL__BASELINE__PATH")
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
