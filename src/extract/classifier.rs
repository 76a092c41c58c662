use crate::extract::field_model::{
    MISSING, NumericConstraints, RecognizedElementKind, RecognizedTag,
};
use crate::markup::document::MarkupNode;

/// Input kind for an element found under `tag`.
pub fn classify<N: MarkupNode>(node: &N, tag: RecognizedTag) -> Option<RecognizedElementKind> {
    match tag {
        RecognizedTag::Input => classify_input(node),
        RecognizedTag::TextArea => Some(RecognizedElementKind::TextArea),
        RecognizedTag::DropdownList => Some(RecognizedElementKind::DropdownList),
        RecognizedTag::DatePicker => Some(RecognizedElementKind::DatePicker),
        RecognizedTag::NumericTextBox => Some(RecognizedElementKind::NumericTextBox),
    }
}

/// Checkbox wins over the Kendo marker. Any other `<input>` stays
/// unclassified; plain text inputs are not mapped to `TextInput`.
pub fn classify_input<N: MarkupNode>(node: &N) -> Option<RecognizedElementKind> {
    if is_checkbox(node) {
        return Some(RecognizedElementKind::Checkbox);
    }

    if node.has_attribute("kendotextbox") {
        return Some(RecognizedElementKind::KendoTextBox);
    }

    None
}

fn is_checkbox<N: MarkupNode>(node: &N) -> bool {
    node.attribute("type")
        .map(|t| t.eq_ignore_ascii_case("checkbox"))
        .unwrap_or(false)
}

/// `[min]`, `[max]` and auto-correct for a numeric text box.
///
/// Auto-correct presence is detected on the plain `autocorrect` attribute
/// while its value is read from `[autocorrect]`; a template carrying only
/// one of the two reports `"Null"`.
pub fn numeric_constraints<N: MarkupNode>(node: &N) -> NumericConstraints {
    let min = node.attribute("[min]").unwrap_or_else(|| MISSING.to_string());
    let max = node.attribute("[max]").unwrap_or_else(|| MISSING.to_string());

    let auto_correct = if node.has_attribute("autocorrect") {
        node.attribute("[autocorrect]")
            .unwrap_or_else(|| MISSING.to_string())
    } else {
        MISSING.to_string()
    };

    NumericConstraints {
        min,
        max,
        auto_correct,
    }
}

/// Constraints for any kind: only numeric text boxes carry real values.
pub fn constraints_for<N: MarkupNode>(node: &N, tag: RecognizedTag) -> NumericConstraints {
    match tag {
        RecognizedTag::NumericTextBox => numeric_constraints(node),
        _ => NumericConstraints::not_applicable(),
    }
}
