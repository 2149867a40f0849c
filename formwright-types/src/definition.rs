use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{FieldValue, OptionLabel};

/// A field's display label.
///
/// Authoring tools emit labels as objects so they can carry visibility
/// and rich-text markers alongside the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Label {
    /// The label text.
    pub value: String,

    /// Hidden labels are still rendered for assistive technology.
    pub visible: bool,

    /// Whether `value` contains markup.
    pub rich_text: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            value: String::new(),
            visible: true,
            rich_text: false,
        }
    }
}

/// One normalized schema node: a form control or a panel of nested nodes.
///
/// This is the read-only input to the rendition engine. Every attribute is
/// optional except the identifiers; unknown JSON keys are ignored so new
/// authoring-tool output does not break deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Unique id within a rendered form.
    pub id: String,

    /// Submission name. For grouped radio/checkbox members the group's
    /// `id` replaces this as the shared input name.
    pub name: String,

    /// Polymorphic tag selecting the rendering strategy, kept raw as
    /// authored. See [`FieldKind`](crate::FieldKind) for dispatch.
    pub field_type: Option<String>,

    /// Underlying value type (`string`, `number`, `string[]`, `file[]`, ...).
    /// Drives multiplicity for selects and file inputs.
    #[serde(rename = "type")]
    pub value_type: Option<String>,

    /// Raw value. Absent values are normalized to an empty string by the
    /// rendition engine before rendering.
    pub value: Option<FieldValue>,

    /// Human-formatted representation of `value`.
    pub display_value: Option<String>,

    /// Format pattern; its presence on number/date fields enables the
    /// masked edit/display swap.
    pub display_format: Option<String>,

    /// Ordered selectable option values.
    #[serde(rename = "enum")]
    pub options: Vec<FieldValue>,

    /// Labels positionally aligned with `enum`; option values double as
    /// labels where this is absent or shorter.
    #[serde(rename = "enumNames")]
    pub option_names: Vec<OptionLabel>,

    pub label: Option<Label>,
    pub description: Option<String>,
    pub tooltip: Option<String>,
    pub placeholder: Option<String>,

    pub required: bool,
    pub read_only: bool,

    /// `Some(false)` renders the control disabled.
    pub enabled: Option<bool>,

    /// Checked marker for single radio/checkbox fields; parsed as a
    /// case-insensitive `"true"` flag.
    pub checked: Option<FieldValue>,

    /// Whether `value` of a plain-text field contains markup.
    pub rich_text: bool,

    /// Autocomplete hint; defaults to `off` at decoration time.
    pub auto_complete: Option<String>,

    pub min_items: Option<u32>,
    pub max_items: Option<u32>,

    /// Upper bound on uploaded file size; tools emit numbers or numeric
    /// strings interchangeably.
    pub max_file_size: Option<FieldValue>,

    pub min_occur: Option<i64>,
    pub max_occur: Option<i64>,

    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub maximum: Option<FieldValue>,
    pub minimum: Option<FieldValue>,
    pub step: Option<FieldValue>,
    pub accept: Option<String>,
    #[serde(rename = "Multiple")]
    pub multiple: Option<FieldValue>,

    /// Grid span, emitted as a layout class on the wrapper.
    #[serde(rename = "Column Span")]
    pub column_span: Option<FieldValue>,

    /// Layout type tag inspected by layout-extension predicates.
    #[serde(rename = ":type")]
    pub layout_type: Option<String>,

    /// Constraint name to user-facing error text.
    pub constraint_messages: BTreeMap<String, String>,

    /// Nested child definitions; present only on panels. Ordering is
    /// rendering order.
    pub items: Vec<FieldDefinition>,

    /// Opaque configuration bag for integrations; not interpreted here.
    pub properties: Option<serde_json::Value>,
}

impl FieldDefinition {
    /// The label text for this field, if any.
    pub fn label_text(&self) -> Option<&str> {
        self.label
            .as_ref()
            .map(|label| label.value.as_str())
            .filter(|text| !text.is_empty())
    }

    /// The option label for position `index`, falling back to the option
    /// value's text form.
    pub fn option_label(&self, index: usize) -> String {
        match self.option_names.get(index) {
            Some(label) => label.text().to_string(),
            None => self
                .options
                .get(index)
                .map(FieldValue::to_text)
                .unwrap_or_default(),
        }
    }

    /// Whether the underlying value type is array-valued.
    pub fn is_multi_valued(&self) -> bool {
        self.value_type
            .as_deref()
            .is_some_and(|ty| ty.ends_with("[]"))
    }

    /// `maxFileSize` as a number, tolerating numeric strings.
    pub fn max_file_size_value(&self) -> Option<f64> {
        self.max_file_size.as_ref().and_then(FieldValue::as_f64)
    }
}

/// The top-level form document: a root panel plus submission metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefinition {
    /// Submission action path, carried onto the form node as metadata.
    pub action: Option<String>,

    /// Initial data handed to the rule engine.
    pub data: Option<serde_json::Value>,

    /// The root panel (its `items` are the top-level fields).
    #[serde(flatten)]
    pub root: FieldDefinition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_and_renamed_keys() {
        let json = r##"{
            "id": "f1",
            "name": "first",
            "fieldType": "number-input",
            "type": "number",
            "displayFormat": "#,##0",
            "maxFileSize": "1048576",
            "Column Span": 6,
            ":type": "forms-wizard",
            "constraintMessages": {"required": "Fill me in"}
        }"##;
        let fd: FieldDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fd.field_type.as_deref(), Some("number-input"));
        assert_eq!(fd.value_type.as_deref(), Some("number"));
        assert_eq!(fd.max_file_size_value(), Some(1_048_576.0));
        assert_eq!(fd.column_span.as_ref().unwrap().to_text(), "6");
        assert_eq!(fd.layout_type.as_deref(), Some("forms-wizard"));
        assert_eq!(
            fd.constraint_messages.get("required").map(String::as_str),
            Some("Fill me in")
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let fd: FieldDefinition =
            serde_json::from_str(r#"{"id":"x","name":"x","somethingNew":true}"#).unwrap();
        assert_eq!(fd.id, "x");
    }

    #[test]
    fn option_label_falls_back_to_value() {
        let fd = FieldDefinition {
            options: vec!["a".into(), "b".into()],
            option_names: vec![OptionLabel::Text("Apple".into())],
            ..Default::default()
        };
        assert_eq!(fd.option_label(0), "Apple");
        assert_eq!(fd.option_label(1), "b");
    }

    #[test]
    fn multi_valued_types() {
        let fd = FieldDefinition {
            value_type: Some("string[]".into()),
            ..Default::default()
        };
        assert!(fd.is_multi_valued());
    }

    #[test]
    fn form_definition_flattens_root_panel() {
        let json = r#"{
            "action": "/forms/contact",
            "items": [{"id": "a", "name": "a"}]
        }"#;
        let form: FormDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(form.action.as_deref(), Some("/forms/contact"));
        assert_eq!(form.root.items.len(), 1);
    }
}
