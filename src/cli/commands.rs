use std::path::Path;

use crate::cli::config::{AppConfig, build_scanner_config};
use crate::extract::extractor::FieldExtractor;
use crate::report::console::format_summary;
use crate::report::json::{STDOUT_TARGET, records_to_json, write_records};
use crate::report::report_model::FieldSummary;
use crate::scan::scanner::{ScanReport, Scanner};

// ============================================================================
// scan subcommand
// ============================================================================

/// Scan the configured root, export the records and print a summary.
pub fn cmd_scan(
    config: &AppConfig,
    root: Option<&str>,
    extension: Option<&str>,
    output: Option<&str>,
    pretty: bool,
    max_depth: Option<usize>,
) -> Result<ScanReport, Box<dyn std::error::Error>> {
    let scanner_config = build_scanner_config(&config.scan, root, extension, max_depth);
    let scanner = Scanner::new(scanner_config, FieldExtractor::new(config.extract.clone()));

    let report = scanner.scan()?;

    let output = output.unwrap_or(&config.export.output);
    let pretty = pretty || config.export.pretty;
    write_records(&report.records, output, pretty)?;

    let summary = format_summary(&FieldSummary::from_scan(&report));
    if output == STDOUT_TARGET {
        eprint!("{}", summary);
    } else {
        print!("{}", summary);
        println!("Wrote {} fields to {}", report.records.len(), output);
    }

    Ok(report)
}

// ============================================================================
// extract subcommand
// ============================================================================

/// Extract one template and return its records as JSON.
pub fn cmd_extract(
    config: &AppConfig,
    file: &str,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let scanner = Scanner::new(
        build_scanner_config(&config.scan, None, None, None),
        FieldExtractor::new(config.extract.clone()),
    );

    let records = scanner.scan_file(Path::new(file))?;
    Ok(records_to_json(&records, pretty || config.export.pretty)?)
}
