//! Sample form definitions used by tests and demos.

use formwright::FormDefinition;

/// A flat contact form: text, email, drop-down, radio group, multiline,
/// and a submit button.
pub const CONTACT: &str = include_str!("../samples/contact.json");

/// A two-step wizard with nested panels, a masked date field, grouped
/// radio/checkbox controls, and a captcha field.
pub const ENROLLMENT_WIZARD: &str = include_str!("../samples/enrollment_wizard.json");

/// Rich text, a multi-file upload, a fragment include, and a checkbox
/// with an unchecked sentinel.
pub const UPLOAD: &str = include_str!("../samples/upload.json");

/// Parse one of the bundled sample definitions.
pub fn parse(sample: &str) -> FormDefinition {
    serde_json::from_str(sample).expect("bundled sample definitions are valid JSON")
}

pub fn contact() -> FormDefinition {
    parse(CONTACT)
}

pub fn enrollment_wizard() -> FormDefinition {
    parse(ENROLLMENT_WIZARD)
}

pub fn upload() -> FormDefinition {
    parse(UPLOAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_parse() {
        assert_eq!(contact().root.items.len(), 6);
        assert_eq!(enrollment_wizard().root.items.len(), 2);
        assert_eq!(upload().root.items.len(), 4);
    }
}
