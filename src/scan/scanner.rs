use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::extract::extractor::FieldExtractor;
use crate::extract::field_model::FieldRecord;
use crate::scan::error::ScanError;

// ============================================================================
// Scanner configuration
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub root: PathBuf,
    /// File extension to keep, without the dot. Compared case-insensitively.
    pub extension: String,
    pub max_depth: Option<usize>,
    pub skip_hidden: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("app"),
            extension: "html".to_string(),
            max_depth: None,
            skip_hidden: true,
        }
    }
}

// ============================================================================
// Scan results
// ============================================================================

/// A template that could not be read or extracted. The scan moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub reason: String,
}

/// Everything a corpus scan produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Records of every successfully extracted file, in file order.
    pub records: Vec<FieldRecord>,
    pub files_scanned: usize,
    pub failures: Vec<FileFailure>,
    pub duration_ms: u128,
}

impl ScanReport {
    pub fn files_extracted(&self) -> usize {
        self.files_scanned - self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

// ============================================================================
// Scanner
// ============================================================================

pub struct Scanner {
    config: ScannerConfig,
    extractor: FieldExtractor,
}

impl Scanner {
    pub fn new(config: ScannerConfig, extractor: FieldExtractor) -> Self {
        Self { config, extractor }
    }

    /// Template files under the root, sorted for a stable run order.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>, ScanError> {
        let root = &self.config.root;
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.clone()));
        }
        if !root.is_dir() {
            return Err(ScanError::RootNotDirectory(root.clone()));
        }

        let mut files = Vec::new();
        for result in WalkBuilder::new(root)
            .max_depth(self.config.max_depth)
            .hidden(self.config.skip_hidden)
            .git_ignore(true)
            .build()
        {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && self.matches_extension(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        debug!(root = %root.display(), count = files.len(), "collected template files");
        Ok(files)
    }

    /// Extract every template under the root.
    ///
    /// Unreadable or malformed files are logged, recorded as failures and
    /// skipped; only an unusable root aborts the scan.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        info!(
            root = %self.config.root.display(),
            extension = %self.config.extension,
            "Starting template scan"
        );

        let files = self.collect_files()?;
        let mut report = ScanReport::default();

        for path in &files {
            report.files_scanned += 1;
            match self.scan_file(path) {
                Ok(records) => {
                    info!(path = %path.display(), fields = records.len(), "Extracted template");
                    report.records.extend(records);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping template");
                    report.failures.push(FileFailure {
                        path: path.display().to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        report.duration_ms = start.elapsed().as_millis();
        info!(
            files_scanned = report.files_scanned,
            fields = report.records.len(),
            failures = report.failures.len(),
            duration_ms = report.duration_ms as u64,
            "Template scan completed"
        );

        Ok(report)
    }

    /// Read and extract one template.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<FieldRecord>, ScanError> {
        let bytes = std::fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let logical_name = path.to_string_lossy();
        Ok(self.extractor.extract_html(&content, &logical_name)?)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(self.config.extension.trim_start_matches('.')))
            .unwrap_or(false)
    }
}
