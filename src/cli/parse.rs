//! CLI parse: clap types for Sentinel. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentinel CLI - File integrity monitoring
#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Record SHA-256 baselines of a directory tree and report changes against them")]
pub struct Cli {
    /// Command to run; prompts for a mode when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Baseline file (overrides configuration)
    #[arg(long)]
    pub baseline: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan the target and trust its current state as the baseline
    Init {
        /// Directory to scan
        #[arg(default_value = ".")]
        target: PathBuf,
    },
    /// Compare the target against the baseline and report changes
    Check {
        /// Directory to scan
        #[arg(default_value = ".")]
        target: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
