use std::collections::BTreeMap;

/// Structured validation configuration attached to a rendered wrapper.
///
/// Browsers communicate these through `data-*` attributes; here they stay
/// typed on the element so validation code never string-matches attribute
/// names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    /// Whether the field must carry a value.
    pub required: bool,

    /// Minimum number of items for multi-valued fields.
    pub min_items: Option<u32>,

    /// Maximum number of items for multi-valued fields.
    pub max_items: Option<u32>,

    /// Upper bound on uploaded file size, in bytes.
    pub max_file_size: Option<f64>,

    /// Constraint name to user-facing error text, overriding the built-in
    /// message for that constraint.
    pub messages: BTreeMap<String, String>,
}

impl ValidationState {
    /// A state carrying only the required flag.
    pub fn required(required: bool) -> Self {
        Self {
            required,
            ..Default::default()
        }
    }

    /// The override message for a constraint, if configured.
    pub fn message(&self, constraint: &str) -> Option<&str> {
        self.messages.get(constraint).map(String::as_str)
    }

    /// Whether nothing is configured.
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.min_items.is_none()
            && self.max_items.is_none()
            && self.max_file_size.is_none()
            && self.messages.is_empty()
    }
}
