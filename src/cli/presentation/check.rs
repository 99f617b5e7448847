//! Check command presentation: alert list in text or json.

use super::shared::{format_skipped, OutputStyle};
use crate::error::SentinelError;
use crate::monitor::CheckOutcome;
use crate::types::ChangeRecord;

fn alert_line(record: &ChangeRecord, style: OutputStyle) -> String {
    let tag = style.change_tag(record.kind());
    match record {
        ChangeRecord::New { path } => format!("{} File created: {}", tag, path),
        ChangeRecord::Modified { path, .. } => format!("{} Content changed: {}", tag, path),
        ChangeRecord::Deleted { path } => format!("{} File removed: {}", tag, path),
    }
}

pub fn format_check_text(outcome: &CheckOutcome, style: OutputStyle) -> String {
    let mut output = format!(
        "Scan complete. Found {} alerts:\n{}",
        outcome.changes.len(),
        "-".repeat(30)
    );

    if outcome.is_clean() {
        output.push('\n');
        output.push_str(&style.success("System secure. No changes detected."));
    } else {
        for record in &outcome.changes {
            output.push('\n');
            output.push_str(&alert_line(record, style));
        }
    }

    let skipped = format_skipped(&outcome.report, style);
    if !skipped.is_empty() {
        output.push_str("\n\n");
        output.push_str(&skipped);
    }
    output
}

pub fn format_check_json(outcome: &CheckOutcome) -> Result<String, SentinelError> {
    let value = serde_json::json!({
        "baseline": outcome.baseline_path,
        "target": outcome.report.root,
        "alerts": outcome.changes.len(),
        "summary": outcome.summary,
        "changes": outcome.changes,
        "skipped": outcome.report.skipped,
        "scanned_files": outcome.report.files_hashed,
        "scanned_at": outcome.report.started_at.to_rfc3339(),
    });
    serde_json::to_string_pretty(&value).map_err(|e| SentinelError::OutputError(e.to_string()))
}
