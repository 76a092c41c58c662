mod common;

use std::fs;
use std::path::Path;

use common::utils::fixture;
use template_fields::extract::error::ExtractError;
use template_fields::extract::extractor::{ExtractConfig, FieldExtractor};
use template_fields::scan::error::ScanError;
use template_fields::scan::scanner::{Scanner, ScannerConfig};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// app/
///   relationship/relationship-detail.component.html
///   loan/loan-detail.component.html
///   loan/loan-detail.component.ts      (ignored: extension)
///   .cache/stale.component.html        (ignored: hidden)
///   shared/empty.component.html        (no fields)
fn corpus() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path().join("app");

    write(
        &app.join("relationship/relationship-detail.component.html"),
        &fixture("relationship-detail.component.html"),
    );
    write(
        &app.join("loan/loan-detail.component.html"),
        &fixture("loan-detail.component.html"),
    );
    write(
        &app.join("loan/loan-detail.component.ts"),
        "export class LoanDetailComponent {}",
    );
    write(
        &app.join(".cache/stale.component.html"),
        "<span>Stale<input type=\"checkbox\" id=\"stale\"></span>",
    );
    write(&app.join("shared/empty.component.html"), "<p>No fields here</p>");

    dir
}

fn scanner_for(root: &Path) -> Scanner {
    Scanner::new(
        ScannerConfig {
            root: root.to_path_buf(),
            ..ScannerConfig::default()
        },
        FieldExtractor::default(),
    )
}

#[test]
fn collects_matching_files_sorted_skipping_hidden() {
    let dir = corpus();
    let files = scanner_for(&dir.path().join("app")).collect_files().unwrap();

    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "loan-detail.component.html",
            "relationship-detail.component.html",
            "empty.component.html",
        ]
    );
}

#[test]
fn hidden_directories_included_when_configured() {
    let dir = corpus();
    let scanner = Scanner::new(
        ScannerConfig {
            root: dir.path().join("app"),
            skip_hidden: false,
            ..ScannerConfig::default()
        },
        FieldExtractor::default(),
    );

    assert_eq!(scanner.collect_files().unwrap().len(), 4);
}

#[test]
fn extension_match_ignores_case_and_leading_dot() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("upper.component.HTML"), "<span>A<input id=\"a\" kendoTextBox></span>");
    write(&dir.path().join("other.component.htm"), "<span>B<input id=\"b\"></span>");

    let scanner = Scanner::new(
        ScannerConfig {
            root: dir.path().to_path_buf(),
            extension: ".html".into(),
            ..ScannerConfig::default()
        },
        FieldExtractor::default(),
    );

    assert_eq!(scanner.collect_files().unwrap().len(), 1);
}

#[test]
fn scan_accumulates_records_in_file_order() {
    let dir = corpus();
    let report = scanner_for(&dir.path().join("app")).scan().unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.files_extracted(), 3);
    assert!(!report.has_failures());
    assert_eq!(report.records.len(), 8 + 3);

    let sources: Vec<&str> = report.records.iter().map(|r| r.source_name.as_str()).collect();
    assert!(sources[..8].iter().all(|s| *s == "loan-detail"));
    assert!(sources[8..].iter().all(|s| *s == "relationship-detail"));
}

#[test]
fn max_depth_limits_walk() {
    let dir = corpus();
    write(&dir.path().join("app/top.component.html"), "<span>Top<input id=\"top\"></span>");

    let scanner = Scanner::new(
        ScannerConfig {
            root: dir.path().join("app"),
            max_depth: Some(1),
            ..ScannerConfig::default()
        },
        FieldExtractor::default(),
    );

    let report = scanner.scan().unwrap();
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.records[0].binding_name, "top");
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = scanner_for(&dir.path().join("nope")).scan();
    assert!(matches!(result, Err(ScanError::RootNotFound(_))));
}

#[test]
fn file_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("single.component.html");
    write(&file, "<p></p>");

    let result = scanner_for(&file).scan();
    assert!(matches!(result, Err(ScanError::RootNotDirectory(_))));
}

#[test]
fn scan_file_reports_unreadable_path() {
    let dir = tempfile::tempdir().unwrap();
    let scanner = scanner_for(dir.path());

    let err = scanner
        .scan_file(&dir.path().join("missing.component.html"))
        .unwrap_err();
    assert!(matches!(err, ScanError::Read { .. }));
    assert!(err.to_string().contains("failed to read"), "{}", err);
}

/// Two templates: one plain input, one numeric box whose ancestor walk a
/// zero-level guard rejects.
fn corpus_with_one_malformed() -> (tempfile::TempDir, Scanner) {
    let dir = tempfile::tempdir().unwrap();
    write(
        &dir.path().join("a.component.html"),
        r#"<span>A<input id="a"></span>"#,
    );
    write(
        &dir.path().join("b.component.html"),
        "<div>N<kendo-numerictextbox></kendo-numerictextbox></div>",
    );

    let scanner = Scanner::new(
        ScannerConfig {
            root: dir.path().to_path_buf(),
            ..ScannerConfig::default()
        },
        FieldExtractor::new(ExtractConfig {
            max_ancestor_depth: Some(0),
        }),
    );
    (dir, scanner)
}

#[test]
fn malformed_template_is_skipped_and_scan_continues() {
    let (_dir, scanner) = corpus_with_one_malformed();

    let report = scanner.scan().unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.files_extracted(), 1);
    assert!(report.has_failures());

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].binding_name, "a");
    assert_eq!(report.records[0].source_name, "a");

    let failure = &report.failures[0];
    assert!(failure.path.ends_with("b.component.html"), "{}", failure.path);
    assert!(failure.reason.contains("malformed document"), "{}", failure.reason);
}

#[test]
fn scan_file_keeps_extraction_error_typed() {
    let (dir, scanner) = corpus_with_one_malformed();

    let err = scanner
        .scan_file(&dir.path().join("b.component.html"))
        .unwrap_err();
    assert!(matches!(
        err,
        ScanError::Extract(ExtractError::MalformedDocument { .. })
    ));
}

#[test]
fn non_utf8_bytes_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin.component.html");
    let mut bytes = b"<span>Caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"<input id=\"cafe\"></span>");
    fs::write(&path, bytes).unwrap();

    let records = scanner_for(dir.path()).scan_file(&path).unwrap();
    assert_eq!(records[0].binding_name, "cafe");
    assert!(records[0].field_name.starts_with("Caf"));
}
