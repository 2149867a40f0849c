//! Field furniture: wrappers, labels, and help text shared by all renderers.

use formwright_types::{Element, FieldDefinition};

/// Build the standard labeled wrapper for a field: a `div` carrying the
/// `field-wrapper` and `form-<name>` classes plus the field's label.
pub fn field_wrapper(fd: &FieldDefinition) -> Element {
    field_wrapper_as(fd, "div", "label")
}

/// Wrapper variant with a custom container tag and label tag
/// (fieldsets use `fieldset`/`legend`).
pub fn field_wrapper_as(fd: &FieldDefinition, tag: &str, label_tag: &str) -> Element {
    let mut wrapper = Element::new(tag);
    wrapper.add_class("field-wrapper");
    if !fd.name.is_empty() {
        wrapper.add_class(format!("form-{}", fd.name));
    }
    if let Some(label) = create_label(fd, label_tag) {
        wrapper.append_element(label);
    }
    wrapper
}

/// Build the field's label element, if it has label text.
pub fn create_label(fd: &FieldDefinition, tag: &str) -> Option<Element> {
    let text = fd.label_text()?;
    let mut label = Element::new(tag);
    if tag == "label" && !fd.id.is_empty() {
        label.set_attr("for", &fd.id);
    }
    if fd.label.as_ref().is_some_and(|label| !label.visible) {
        label.add_class("hidden");
    }
    label.append_text(text);
    Some(label)
}

/// Build the help-text block linked from the control via
/// `aria-describedby`.
pub fn help_text(fd: &FieldDefinition) -> Element {
    let mut help = Element::new("div");
    help.add_class("field-description");
    help.set_attr("id", format!("{}-description", fd.id));
    if let Some(description) = &fd.description {
        help.append_text(description);
    }
    help
}

/// Apply the field's placeholder, when present.
pub fn set_placeholder(element: &mut Element, fd: &FieldDefinition) {
    if let Some(placeholder) = &fd.placeholder {
        element.set_attr("placeholder", placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_field() -> FieldDefinition {
        FieldDefinition {
            id: "first-name".into(),
            name: "firstName".into(),
            label: Some(formwright_types::Label {
                value: "First name".into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn wrapper_carries_name_class_and_label() {
        let wrapper = field_wrapper(&named_field());
        assert!(wrapper.has_class("field-wrapper"));
        assert!(wrapper.has_class("form-firstName"));
        let label = wrapper.child_elements().next().unwrap();
        assert_eq!(label.tag(), "label");
        assert_eq!(label.attr("for"), Some("first-name"));
    }

    #[test]
    fn invisible_labels_are_hidden_not_dropped() {
        let mut fd = named_field();
        fd.label.as_mut().unwrap().visible = false;
        let label = create_label(&fd, "label").unwrap();
        assert!(label.has_class("hidden"));
    }

    #[test]
    fn help_text_id_matches_aria_linkage() {
        let mut fd = named_field();
        fd.description = Some("Shown on your profile".into());
        let help = help_text(&fd);
        assert_eq!(help.attr("id"), Some("first-name-description"));
    }
}
