//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; a single route table dispatches to the monitor.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_check_json, format_check_text, format_init_summary, format_skipped, OutputStyle,
};
pub use route::RunContext;
