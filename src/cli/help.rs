//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log records (e.g. "init", "check").
pub fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        Some(Commands::Init { .. }) => "init",
        Some(Commands::Check { .. }) => "check",
        None => "interactive",
    }
}
