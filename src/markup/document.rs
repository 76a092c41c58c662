use crate::extract::error::ExtractError;

// ============================================================================
// Capability interface the field extractor queries
// ============================================================================

/// A parsed markup tree that can list its elements by tag name.
///
/// Implemented once per parsing library. The extractor never touches the
/// underlying parser directly, so any tree that can answer these queries
/// (and the per-node queries on [`MarkupNode`]) can be scanned.
pub trait MarkupDocument {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    /// All elements with the given tag name, in document order.
    fn elements_by_tag<'a>(&'a self, tag: &str) -> Result<Vec<Self::Node<'a>>, ExtractError>;
}

/// Per-node queries used by the field heuristics.
pub trait MarkupNode: Sized {
    /// Tag name, lowercase. Used for logging and error context.
    fn tag_name(&self) -> String;

    fn has_attribute(&self, name: &str) -> bool;

    /// Attribute value if present. An attribute written without a value
    /// (`<input kendotextbox>`) is present with an empty value.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Parent element, or `None` once the document root has been reached.
    fn parent(&self) -> Option<Self>;

    /// Concatenated text of every descendant text node.
    fn text_content(&self) -> String;

    /// Text of the first label associated with this element, if any.
    fn label_text(&self) -> Option<String>;
}
