//! CLI presentation: text and json formatters per command.

mod check;
mod init;
mod shared;

pub use check::{format_check_json, format_check_text};
pub use init::format_init_summary;
pub use shared::{format_skipped, OutputStyle};
