use serde::{Deserialize, Serialize};

/// A field's current value as authored in the schema.
///
/// Form definitions are plain JSON, so a value may arrive as a string,
/// a number, a boolean, or an array of any of those (multi-select,
/// multi-file). The untagged representation accepts whatever the
/// authoring tool emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean value.
    Bool(bool),
    /// Numeric value, kept as authored (integer or float).
    Number(serde_json::Number),
    /// String value.
    String(String),
    /// Array value for multi-valued fields.
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// The empty-string value the engine normalizes absent values to.
    pub fn empty() -> Self {
        Self::String(String::new())
    }

    /// Canonical text form used for attribute emission and option matching.
    ///
    /// Lists join their elements with commas, matching how multi-values
    /// serialize into a single attribute.
    pub fn to_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(FieldValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Whether this value is an array.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether this value is absent-equivalent (empty string or empty list).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Equality (scalar) or membership (list) test against an option value.
    ///
    /// This is the selected/checked computation shared by selects and
    /// grouped radio/checkbox controls.
    pub fn matches_option(&self, option_value: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item.to_text() == option_value),
            other => other.to_text() == option_value,
        }
    }

    /// Parse this value as a case-insensitive `"true"` flag.
    ///
    /// Used for the `checked` marker, which authoring tools emit as a
    /// string more often than as a boolean.
    pub fn is_true_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::String(s) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Numeric interpretation, accepting both numbers and numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Number(i.into())
    }
}

/// One entry of `enumNames`.
///
/// Usually a plain string, but some authoring dialects emit structured
/// entries carrying the label under a `value` sub-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionLabel {
    /// Plain text label.
    Text(String),
    /// Structured entry; the label lives in `value`.
    Structured {
        value: String,
        #[serde(default, rename = "richText")]
        rich_text: bool,
    },
}

impl OptionLabel {
    /// The label text regardless of representation.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Structured { value, .. } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_matches_by_equality() {
        let value = FieldValue::from("b");
        assert!(value.matches_option("b"));
        assert!(!value.matches_option("a"));
    }

    #[test]
    fn list_matches_by_membership() {
        let value = FieldValue::List(vec!["x".into(), "y".into()]);
        assert!(value.matches_option("y"));
        assert!(!value.matches_option("z"));
    }

    #[test]
    fn numbers_match_their_text_form() {
        let value: FieldValue = serde_json::from_str("42").unwrap();
        assert!(value.matches_option("42"));
        assert_eq!(value.to_text(), "42");
    }

    #[test]
    fn true_flag_is_case_insensitive() {
        assert!(FieldValue::from("TRUE").is_true_flag());
        assert!(FieldValue::from(true).is_true_flag());
        assert!(!FieldValue::from("yes").is_true_flag());
    }

    #[test]
    fn structured_option_label() {
        let label: OptionLabel = serde_json::from_str(r#"{"value":"Apple"}"#).unwrap();
        assert_eq!(label.text(), "Apple");
        let label: OptionLabel = serde_json::from_str(r#""Banana""#).unwrap();
        assert_eq!(label.text(), "Banana");
    }
}
