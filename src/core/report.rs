//! Purpose: Assemble the Markdown conversion-and-comparison report.
//! Exports: `render`, `truncate_for_display`, `PREVIEW_MAX_LEN`.
//! Role: Small, pure formatter; transport callers emit the report verbatim.
//! Invariants: Previews at or under `PREVIEW_MAX_LEN` pass through
//! unmodified; longer previews are cut and end with the truncation marker.

use serde_json::Value;

use crate::core::compare::ComparisonOutcome;
use crate::core::json;

pub const PREVIEW_MAX_LEN: usize = 1000;

const TITLE: &str = "# XML to JSON Conversion and Comparison Report\n\n";
const TRUNCATION_MARKER: &str = "\n... (truncated for display)";

pub fn render(outcome: &ComparisonOutcome, converted: &Value, provided: &Value) -> String {
    let mut report = String::new();
    report.push_str(TITLE);

    match outcome {
        ComparisonOutcome::Match => {
            report.push_str("## ✅ Comparison Result: MATCH\n\n");
            report.push_str(
                "The converted JSON matches the provided JSON (ignoring whitespace and field order).\n\n",
            );
        }
        ComparisonOutcome::Difference(differences) => {
            report.push_str("## ❌ Comparison Result: DIFFERENCES FOUND\n\n");
            report.push_str("### Differences:\n\n");
            report.push_str(differences);
            report.push_str("\n\n");
        }
        ComparisonOutcome::Error(message) => {
            report.push_str("## ⚠️ Comparison Error\n\n");
            report.push_str("Error during JSON comparison: ");
            report.push_str(message);
            report.push_str("\n\n");
        }
    }

    push_preview(&mut report, "Converted JSON Preview", converted);
    push_preview(&mut report, "Provided JSON Preview", provided);
    report
}

fn push_preview(report: &mut String, heading: &str, value: &Value) {
    report.push_str("## ");
    report.push_str(heading);
    report.push_str("\n\n```json\n");
    report.push_str(&truncate_for_display(&json::pretty_string(value)));
    report.push_str("\n```\n\n");
}

pub fn truncate_for_display(content: &str) -> String {
    if content.chars().count() <= PREVIEW_MAX_LEN {
        return content.to_string();
    }
    let cut: String = content.chars().take(PREVIEW_MAX_LEN).collect();
    format!("{cut}{TRUNCATION_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::{render, truncate_for_display, PREVIEW_MAX_LEN, TRUNCATION_MARKER};
    use crate::core::compare::ComparisonOutcome;
    use serde_json::json;

    #[test]
    fn content_at_the_limit_is_unmodified() {
        let content = "x".repeat(PREVIEW_MAX_LEN);
        assert_eq!(truncate_for_display(&content), content);
    }

    #[test]
    fn content_over_the_limit_ends_with_the_marker() {
        let content = "x".repeat(PREVIEW_MAX_LEN + 1);
        let truncated = truncate_for_display(&content);
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            truncated.chars().count(),
            PREVIEW_MAX_LEN + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn match_report_carries_banner_and_both_previews() {
        let value = json!({"name": "John"});
        let report = render(&ComparisonOutcome::Match, &value, &value);
        assert!(report.starts_with("# XML to JSON Conversion and Comparison Report"));
        assert!(report.contains("## ✅ Comparison Result: MATCH"));
        assert!(report.contains("## Converted JSON Preview"));
        assert!(report.contains("## Provided JSON Preview"));
        assert!(report.contains("\"name\": \"John\""));
    }

    #[test]
    fn difference_report_embeds_the_diff_message() {
        let value = json!({});
        let outcome =
            ComparisonOutcome::Difference("field \"age\": expected \"30\", found \"25\"".to_string());
        let report = render(&outcome, &value, &value);
        assert!(report.contains("## ❌ Comparison Result: DIFFERENCES FOUND"));
        assert!(report.contains("### Differences:"));
        assert!(report.contains("field \"age\": expected \"30\", found \"25\""));
    }

    #[test]
    fn error_report_uses_the_warning_banner() {
        let value = json!(null);
        let outcome = ComparisonOutcome::Error("expected JSON failed to parse".to_string());
        let report = render(&outcome, &value, &value);
        assert!(report.contains("## ⚠️ Comparison Error"));
        assert!(report.contains("Error during JSON comparison: expected JSON failed to parse"));
    }
}
