use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::extract::binding::resolve_binding_name;
use crate::extract::classifier::{classify, constraints_for};
use crate::extract::error::ExtractError;
use crate::extract::field_model::{FieldRecord, RecognizedTag};
use crate::extract::field_name::resolve_field_name;
use crate::markup::document::{MarkupDocument, MarkupNode};
use crate::markup::html::HtmlDocument;

// ============================================================================
// Extractor configuration
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Cycle guard for the numeric-text-box ancestor walk. Unset walks the
    /// whole parent chain; parsed HTML always ends at `<html>`.
    #[serde(default)]
    pub max_ancestor_depth: Option<usize>,
}

// ============================================================================
// Field extractor
// ============================================================================

/// Turns one parsed template into field records.
///
/// Holds only immutable configuration, so a single extractor can be shared
/// across documents (and threads).
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    config: ExtractConfig,
}

impl FieldExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Records for every recognized element, grouped by tag in
    /// [`RecognizedTag::SCAN_ORDER`] and in document order within a group.
    ///
    /// All-or-nothing: on error no records for this document are returned.
    pub fn extract<D: MarkupDocument>(
        &self,
        document: &D,
        source_name: &str,
    ) -> Result<Vec<FieldRecord>, ExtractError> {
        let source = derive_source_name(source_name);
        let mut records = Vec::new();

        for tag in RecognizedTag::SCAN_ORDER {
            let elements = document.elements_by_tag(tag.tag_name())?;
            trace!(tag = tag.tag_name(), count = elements.len(), "matched elements");

            for element in &elements {
                let record = self.build_record(element, tag, &source)?;
                debug!(
                    field_name = %record.field_name,
                    binding_name = %record.binding_name,
                    input_kind = ?record.input_kind,
                    source = %record.source_name,
                    min = %record.min,
                    max = %record.max,
                    auto_correct = %record.auto_correct,
                    "field extracted"
                );
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Parse `source` as HTML and extract it.
    pub fn extract_html(
        &self,
        source: &str,
        source_name: &str,
    ) -> Result<Vec<FieldRecord>, ExtractError> {
        let document = HtmlDocument::parse(source);
        trace!(source_name, parse_errors = document.parse_errors(), "parsed template");
        self.extract(&document, source_name)
    }

    fn build_record<N: MarkupNode>(
        &self,
        element: &N,
        tag: RecognizedTag,
        source: &str,
    ) -> Result<FieldRecord, ExtractError> {
        let field_name = resolve_field_name(element, tag, self.config.max_ancestor_depth)?;
        let constraints = constraints_for(element, tag);

        Ok(FieldRecord {
            field_name,
            binding_name: resolve_binding_name(element),
            input_kind: classify(element, tag),
            source_name: source.to_string(),
            min: constraints.min,
            max: constraints.max,
            auto_correct: constraints.auto_correct,
        })
    }
}

// ============================================================================
// Source names
// ============================================================================

/// `app/loan-detail.component.html` -> `loan-detail`.
///
/// Drops everything up to the last `/` or `\`, then everything from the
/// first `.component`. Names without that segment lose their extension.
pub fn derive_source_name(logical_name: &str) -> String {
    let file = logical_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(logical_name);

    let end = file
        .find(".component")
        .or_else(|| file.find('.'))
        .unwrap_or(file.len());

    file[..end].to_string()
}
