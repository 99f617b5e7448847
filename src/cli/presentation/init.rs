//! Init command presentation: baseline summary.

use super::shared::{format_skipped, OutputStyle};
use crate::monitor::InitOutcome;

pub fn format_init_summary(outcome: &InitOutcome, style: OutputStyle) -> String {
    let mut output = style.success(&format!(
        "[+] Baseline saved to {} ({} files)",
        outcome.baseline_path.display(),
        outcome.files
    ));
    output.push_str(&format!("\n    Target: {}", outcome.report.root.display()));

    let skipped = format_skipped(&outcome.report, style);
    if !skipped.is_empty() {
        output.push('\n');
        output.push_str(&skipped);
    }
    output
}
