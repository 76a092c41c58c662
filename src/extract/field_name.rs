use crate::extract::error::ExtractError;
use crate::extract::field_model::RecognizedTag;
use crate::markup::document::MarkupNode;

/// Human-readable field name for an element of the given tag.
///
/// - text areas prefer their associated label, then the parent's text
/// - numeric text boxes take the nearest ancestor with any text
/// - everything else takes the immediate parent's text
pub fn resolve_field_name<N: MarkupNode>(
    node: &N,
    tag: RecognizedTag,
    max_ancestor_depth: Option<usize>,
) -> Result<String, ExtractError> {
    match tag {
        RecognizedTag::TextArea => match node.label_text() {
            Some(label) => Ok(label.trim().to_string()),
            None => parent_text(node),
        },
        RecognizedTag::NumericTextBox => nearest_ancestor_text(node, max_ancestor_depth),
        RecognizedTag::Input | RecognizedTag::DropdownList | RecognizedTag::DatePicker => {
            parent_text(node)
        }
    }
}

fn parent_text<N: MarkupNode>(node: &N) -> Result<String, ExtractError> {
    let parent = node.parent().ok_or_else(|| {
        ExtractError::malformed(format!("<{}> has no parent element", node.tag_name()))
    })?;

    Ok(parent.text_content().trim().to_string())
}

/// Walk parents until one has non-blank text. Reaching the root yields "".
///
/// With `max_depth` set, a chain longer than that is treated as a cycle and
/// rejected. Without it the walk follows the chain to its end.
pub fn nearest_ancestor_text<N: MarkupNode>(
    node: &N,
    max_depth: Option<usize>,
) -> Result<String, ExtractError> {
    let mut current = node.parent();
    let mut depth = 0;

    while let Some(ancestor) = current {
        depth += 1;
        if let Some(limit) = max_depth.filter(|&limit| depth > limit) {
            return Err(ExtractError::malformed(format!(
                "parent chain of <{}> exceeds {} levels",
                node.tag_name(),
                limit
            )));
        }

        let text = ancestor.text_content();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }

        current = ancestor.parent();
    }

    Ok(String::new())
}
