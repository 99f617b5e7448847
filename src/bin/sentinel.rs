//! Sentinel CLI Binary
//!
//! Command-line interface for the Sentinel file integrity monitor.

use clap::Parser;
use sentinel::cli::{command_name, map_error, Cli, RunContext};
use sentinel::config::ConfigLoader;
use sentinel::logging::{init_logging, LoggingConfig};
use std::path::Path;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("[-] Cannot determine working directory: {}", e);
            process::exit(1);
        }
    };

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli, &working_dir);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let command = command_name(cli.command.as_ref());
    info!(command, "Sentinel CLI starting");

    let context = match RunContext::new(&working_dir, cli.config.clone(), cli.baseline.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(cli.command.as_ref()) {
        Ok(output) => {
            info!(command, "Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(command, "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file
fn build_logging_config(cli: &Cli, working_dir: &Path) -> LoggingConfig {
    // Without --verbose nothing is logged
    if !cli.verbose {
        return LoggingConfig::disabled();
    }

    let loaded = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => ConfigLoader::load(working_dir),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    // CLI arguments win over the file
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
