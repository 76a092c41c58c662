//! Field metadata extraction for Angular/Kendo component templates.
//!
//! [`extract::extractor::FieldExtractor`] turns one parsed template into
//! [`extract::field_model::FieldRecord`]s; [`scan::scanner::Scanner`] runs it
//! over a directory tree and [`report`] exports the results.

use crate::extract::error::ExtractError;
use crate::extract::extractor::FieldExtractor;
use crate::extract::field_model::FieldRecord;

pub mod cli;
pub mod extract;
pub mod markup;
pub mod report;
pub mod scan;
pub mod trace;

/// Extract the fields of one HTML template with the default configuration.
pub fn extract_template(source: &str, source_name: &str) -> Result<Vec<FieldRecord>, ExtractError> {
    FieldExtractor::default().extract_html(source, source_name)
}
