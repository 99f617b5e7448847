//! CLI route: single route table and run context. Dispatches to the monitor and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_check_json, format_check_text, format_init_summary, OutputStyle,
};
use crate::config::{ConfigLoader, SentinelConfig};
use crate::error::SentinelError;
use crate::monitor::{Monitor, MonitorSettings};
use std::path::{Path, PathBuf};
use tracing::info;

/// Mode picked from the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Initialize,
    Check,
}

/// Runtime context for CLI execution: resolved configuration and baseline location.
pub struct RunContext {
    config: SentinelConfig,
    style: OutputStyle,
}

impl RunContext {
    /// Create run context from an optional config file and baseline override.
    ///
    /// Without a config file, configuration is discovered from standard
    /// sources with `working_dir` supplying `sentinel.toml`.
    pub fn new(
        working_dir: &Path,
        config_path: Option<PathBuf>,
        baseline_override: Option<PathBuf>,
    ) -> Result<Self, SentinelError> {
        let mut config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(working_dir)?,
        };

        if let Some(baseline) = baseline_override {
            config.baseline.path = baseline;
        }

        Ok(Self::from_config(config)?.with_style(OutputStyle::for_stdout()))
    }

    /// Create run context from an already-built configuration.
    pub fn from_config(config: SentinelConfig) -> Result<Self, SentinelError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            SentinelError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            config,
            style: OutputStyle::plain(),
        })
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn config(&self) -> &SentinelConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    ///
    /// With no command the operator is prompted for a mode; the target is the
    /// current directory.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, SentinelError> {
        match command {
            Some(Commands::Init { target }) => self.handle_init(target),
            Some(Commands::Check { target, format }) => self.handle_check(target, format),
            None => match prompt_mode()? {
                Mode::Initialize => self.handle_init(Path::new(".")),
                Mode::Check => self.handle_check(Path::new("."), "text"),
            },
        }
    }

    fn monitor(&self, target: &Path) -> Monitor {
        Monitor::new(MonitorSettings::from_config(target, &self.config))
    }

    fn handle_init(&self, target: &Path) -> Result<String, SentinelError> {
        info!(target = %target.display(), "Initializing baseline");
        let outcome = self.monitor(target).initialize()?;
        Ok(format_init_summary(&outcome, self.style))
    }

    fn handle_check(&self, target: &Path, format: &str) -> Result<String, SentinelError> {
        if format != "text" && format != "json" {
            return Err(SentinelError::InputError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                format
            )));
        }

        info!(target = %target.display(), "Running integrity check");
        let outcome = self.monitor(target).check()?;

        if format == "json" {
            format_check_json(&outcome)
        } else {
            Ok(format_check_text(&outcome, self.style))
        }
    }
}

fn prompt_mode() -> Result<Mode, SentinelError> {
    use dialoguer::Select;

    let selection = Select::new()
        .with_prompt("Select mode")
        .items(&[
            "Initialize baseline (trust current state)",
            "Run integrity check",
        ])
        .default(1)
        .interact()
        .map_err(|e| SentinelError::InputError(format!("Failed to get user input: {}", e)))?;

    match selection {
        0 => Ok(Mode::Initialize),
        _ => Ok(Mode::Check),
    }
}
