use crate::FieldDefinition;

/// The rendering strategy selected by a field's type tag.
///
/// Dispatch strips a trailing `-input` from the authored tag and defaults
/// to [`FieldKind::Default`] for absent or unrecognized tags, so the tag
/// set stays open: new authoring-tool types degrade to a generic input
/// instead of failing the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Generic single-input control; also the fallback for unknown tags.
    Default,
    DropDown,
    PlainText,
    Checkbox,
    Button,
    Multiline,
    Panel,
    Radio,
    RadioGroup,
    CheckboxGroup,
    File,
    Fragment,
    /// Captured by the engine and omitted from the rendered flow.
    Captcha,
}

impl FieldKind {
    /// Resolve a raw `fieldType` tag.
    pub fn parse(tag: Option<&str>) -> Self {
        let tag = tag.unwrap_or("text");
        let tag = tag.strip_suffix("-input").unwrap_or(tag);
        match tag {
            "drop-down" => Self::DropDown,
            "plain-text" => Self::PlainText,
            "checkbox" => Self::Checkbox,
            "button" => Self::Button,
            "multiline" => Self::Multiline,
            "panel" => Self::Panel,
            "radio" => Self::Radio,
            "radio-group" => Self::RadioGroup,
            "checkbox-group" => Self::CheckboxGroup,
            "file" => Self::File,
            "fragment" => Self::Fragment,
            "captcha" => Self::Captcha,
            _ => Self::Default,
        }
    }

    /// Whether this kind synthesizes its own member decoration
    /// (grouped radio/checkbox), bypassing the shared field decorator.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::RadioGroup | Self::CheckboxGroup)
    }
}

impl FieldDefinition {
    /// The rendering strategy for this field.
    pub fn kind(&self) -> FieldKind {
        FieldKind::parse(self.field_type.as_deref())
    }

    /// The HTML-level control kind for this field.
    pub fn render_type(&self) -> RenderType {
        RenderType::parse(self.field_type.as_deref())
    }
}

/// The concrete HTML control kind derived from a field's type tag.
///
/// This is the key into the constraint table; kinds outside the table
/// ([`RenderType::Other`]) carry no constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderType {
    Text,
    Password,
    Tel,
    Email,
    Number,
    Range,
    Date,
    File,
    Checkbox,
    Radio,
    Fieldset,
    /// Tags without an HTML input equivalent (selects, groups, unknown).
    Other,
}

impl RenderType {
    /// Resolve a raw `fieldType` tag to its control kind.
    pub fn parse(tag: Option<&str>) -> Self {
        let tag = tag.unwrap_or("text");
        let tag = tag.strip_suffix("-input").unwrap_or(tag);
        match tag {
            "text" => Self::Text,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "email" => Self::Email,
            "number" => Self::Number,
            "range" => Self::Range,
            "date" => Self::Date,
            "file" => Self::File,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "panel" => Self::Fieldset,
            _ => Self::Other,
        }
    }

    /// The `type` attribute emitted on an `<input>` of this kind.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Number => "number",
            Self::Range => "range",
            Self::Date => "date",
            Self::File => "file",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            // Fieldsets are not inputs; unknown kinds degrade to text.
            Self::Fieldset | Self::Other => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_suffix_is_stripped() {
        assert_eq!(FieldKind::parse(Some("number-input")), FieldKind::Default);
        assert_eq!(RenderType::parse(Some("number-input")), RenderType::Number);
        assert_eq!(FieldKind::parse(Some("checkbox-input")), FieldKind::Checkbox);
    }

    #[test]
    fn absent_tag_defaults_to_text() {
        assert_eq!(FieldKind::parse(None), FieldKind::Default);
        assert_eq!(RenderType::parse(None), RenderType::Text);
    }

    #[test]
    fn unknown_tags_fall_through() {
        assert_eq!(FieldKind::parse(Some("holographic")), FieldKind::Default);
        assert_eq!(RenderType::parse(Some("holographic")), RenderType::Other);
        assert_eq!(RenderType::Other.input_type(), "text");
    }

    #[test]
    fn groups_bypass_the_shared_decorator() {
        assert!(FieldKind::parse(Some("radio-group")).is_group());
        assert!(FieldKind::parse(Some("checkbox-group")).is_group());
        assert!(!FieldKind::parse(Some("radio")).is_group());
    }
}
