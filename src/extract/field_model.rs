use std::fmt;

use serde::{Deserialize, Serialize};

/// Constraint value for element kinds that carry no numeric constraints.
pub const NOT_APPLICABLE: &str = "N/A";

/// Constraint value for a numeric text box missing the attribute.
pub const MISSING: &str = "Null";

/// Widget and native-control categories the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecognizedElementKind {
    /// Plain text `<input>`. Part of the output vocabulary, but the input
    /// heuristics currently never assign it (see `classify_input`).
    #[serde(rename = "text")]
    TextInput,
    #[serde(rename = "checkbox")]
    Checkbox,
    #[serde(rename = "kendoTextBox")]
    KendoTextBox,
    #[serde(rename = "textarea")]
    TextArea,
    #[serde(rename = "kendo-dropdownlist")]
    DropdownList,
    #[serde(rename = "kendo-datepicker")]
    DatePicker,
    #[serde(rename = "kendo-numerictextbox")]
    NumericTextBox,
}

impl RecognizedElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognizedElementKind::TextInput => "text",
            RecognizedElementKind::Checkbox => "checkbox",
            RecognizedElementKind::KendoTextBox => "kendoTextBox",
            RecognizedElementKind::TextArea => "textarea",
            RecognizedElementKind::DropdownList => "kendo-dropdownlist",
            RecognizedElementKind::DatePicker => "kendo-datepicker",
            RecognizedElementKind::NumericTextBox => "kendo-numerictextbox",
        }
    }
}

impl fmt::Display for RecognizedElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags scanned per document, in output order.
///
/// Records are grouped by this order first and document order second, so
/// consumers can rely on e.g. all inputs preceding all text areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizedTag {
    Input,
    TextArea,
    DropdownList,
    DatePicker,
    NumericTextBox,
}

impl RecognizedTag {
    pub const SCAN_ORDER: [RecognizedTag; 5] = [
        RecognizedTag::Input,
        RecognizedTag::TextArea,
        RecognizedTag::DropdownList,
        RecognizedTag::DatePicker,
        RecognizedTag::NumericTextBox,
    ];

    pub fn tag_name(&self) -> &'static str {
        match self {
            RecognizedTag::Input => "input",
            RecognizedTag::TextArea => "textarea",
            RecognizedTag::DropdownList => "kendo-dropdownlist",
            RecognizedTag::DatePicker => "kendo-datepicker",
            RecognizedTag::NumericTextBox => "kendo-numerictextbox",
        }
    }
}

/// Metadata for one recognized element.
///
/// Field names on the wire match the JSON the field inventory has always
/// been published in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "ActualFieldName")]
    pub field_name: String,

    #[serde(rename = "BindingPropertyName")]
    pub binding_name: String,

    /// `None` for an `<input>` that is neither a checkbox nor a Kendo text box.
    #[serde(rename = "inputType", default, skip_serializing_if = "Option::is_none")]
    pub input_kind: Option<RecognizedElementKind>,

    #[serde(rename = "fileName")]
    pub source_name: String,

    pub min: String,
    pub max: String,

    #[serde(rename = "autoCorrect")]
    pub auto_correct: String,
}

/// Min/max/auto-correct triple attached to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericConstraints {
    pub min: String,
    pub max: String,
    pub auto_correct: String,
}

impl NumericConstraints {
    pub fn not_applicable() -> Self {
        Self {
            min: NOT_APPLICABLE.to_string(),
            max: NOT_APPLICABLE.to_string(),
            auto_correct: NOT_APPLICABLE.to_string(),
        }
    }
}
