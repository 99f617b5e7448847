//! Shared presentation: colour handling and skipped-entry listing.

use crate::tree::scanner::ScanReport;
use crate::types::ChangeKind;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Whether rendered output may carry ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colour only when stdout is a terminal.
    pub fn for_stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn change_tag(&self, kind: ChangeKind) -> String {
        let tag = format!("[{}]", kind.tag());
        if !self.color {
            return tag;
        }
        match kind {
            ChangeKind::New => tag.green().to_string(),
            ChangeKind::Modified => tag.yellow().to_string(),
            ChangeKind::Deleted => tag.red().to_string(),
        }
    }

    pub(crate) fn success(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn warning(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

/// List the entries a scan left out; empty when nothing was skipped.
pub fn format_skipped(report: &ScanReport, style: OutputStyle) -> String {
    if report.skipped.is_empty() {
        return String::new();
    }

    let mut output = style.warning(&format!(
        "Skipped {} entries (not in snapshot):",
        report.skipped.len()
    ));
    for entry in &report.skipped {
        output.push_str(&format!("\n  [!] {}: {}", entry.path.display(), entry.reason));
    }
    output
}
