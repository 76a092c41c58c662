use std::collections::BTreeMap;

use serde::Serialize;

use crate::extract::field_model::FieldRecord;
use crate::scan::scanner::{FileFailure, ScanReport};

// ============================================================================
// Field inventory summary: aggregates the records of one scan
// ============================================================================

/// Counts derived from a [`ScanReport`], consumed by the console reporter.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    /// Total number of records
    pub total_fields: usize,

    /// Number of template files visited; only known for a full scan
    pub files_scanned: usize,

    /// Distinct source names among the records
    pub source_count: usize,

    /// Records per source name, sorted by name
    pub per_source: BTreeMap<String, usize>,

    /// Records per input kind; `unresolved` counts inputs with no kind
    pub per_kind: BTreeMap<String, usize>,

    /// Records with an empty field name
    pub unnamed_fields: usize,

    /// Records with an empty binding name
    pub unbound_fields: usize,

    /// Skipped files and why
    pub failures: Vec<FileFailure>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

pub const UNRESOLVED_KIND: &str = "unresolved";

impl FieldSummary {
    pub fn from_records(records: &[FieldRecord]) -> Self {
        let mut per_source = BTreeMap::new();
        let mut per_kind = BTreeMap::new();

        for record in records {
            *per_source.entry(record.source_name.clone()).or_insert(0) += 1;

            let kind = record
                .input_kind
                .map(|k| k.as_str().to_string())
                .unwrap_or_else(|| UNRESOLVED_KIND.to_string());
            *per_kind.entry(kind).or_insert(0) += 1;
        }

        Self {
            total_fields: records.len(),
            files_scanned: 0,
            source_count: per_source.len(),
            per_source,
            per_kind,
            unnamed_fields: records.iter().filter(|r| r.field_name.is_empty()).count(),
            unbound_fields: records.iter().filter(|r| r.binding_name.is_empty()).count(),
            failures: Vec::new(),
            duration_ms: None,
        }
    }

    /// Summary of a full scan, including files that produced no records.
    pub fn from_scan(report: &ScanReport) -> Self {
        let mut summary = Self::from_records(&report.records);
        summary.files_scanned = report.files_scanned;
        summary.failures = report.failures.clone();
        summary.duration_ms = Some(report.duration_ms);
        summary
    }

    pub fn kind_count(&self, kind: &str) -> usize {
        self.per_kind.get(kind).copied().unwrap_or(0)
    }
}
