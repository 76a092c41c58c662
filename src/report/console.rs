use crate::report::report_model::FieldSummary;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a field summary for terminal output.
///
/// Produces output like:
/// ```text
/// === Field Inventory: 12 fields in 2 files ===
///
/// By source:
///   loan-detail                    8
///   relationship-detail            4
///
/// By kind:
///   checkbox                       3
///   kendo-numerictextbox           2
///   unresolved                     1
///
/// 1 field(s) without a name, 0 without a binding
///
/// Skipped 1 file(s):
///     [SKIP] app/broken.component.html: malformed document: ...
/// ```
pub fn format_summary(summary: &FieldSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Field Inventory: {} fields in {} files ===\n",
        summary.total_fields, summary.files_scanned
    ));

    if !summary.per_source.is_empty() {
        out.push_str("\nBy source:\n");
        for (source, count) in &summary.per_source {
            out.push_str(&format!("  {:<30} {}\n", source, count));
        }
    }

    if !summary.per_kind.is_empty() {
        out.push_str("\nBy kind:\n");
        for (kind, count) in &summary.per_kind {
            out.push_str(&format!("  {:<30} {}\n", kind, count));
        }
    }

    out.push_str(&format!(
        "\n{} field(s) without a name, {} without a binding\n",
        summary.unnamed_fields, summary.unbound_fields
    ));

    if !summary.failures.is_empty() {
        out.push_str(&format!("\nSkipped {} file(s):\n", summary.failures.len()));
        for failure in &summary.failures {
            out.push_str(&format!("    [SKIP] {}: {}\n", failure.path, failure.reason));
        }
    }

    if let Some(ms) = summary.duration_ms {
        out.push_str(&format!("\nCompleted in {:.1}s\n", ms as f64 / 1000.0));
    }

    out
}
