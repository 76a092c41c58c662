use thiserror::Error;

/// Failure to query a document the way the field heuristics need.
///
/// Ambiguous elements (no label text, no binding, unknown input kind) are not
/// errors; they produce records with empty or placeholder values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Tag lookup failed or the parent chain is missing or does not terminate.
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },
}

impl ExtractError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ExtractError::MalformedDocument {
            reason: reason.into(),
        }
    }
}
