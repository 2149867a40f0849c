//! Primitive renderers: one strategy per field kind, plus the dispatch
//! that picks one.
//!
//! Every renderer is a pure function from a field definition to an
//! element subtree. Unknown kinds fall through to the generic
//! single-input renderer so unrecognized authoring output degrades
//! instead of failing the render.

use formwright_types::{
    Element, FieldDefinition, FieldKind, Label, Node, ValidationState,
};

use crate::collab::Collaborators;
use crate::constraint::apply_constraints;
use crate::field::{field_wrapper, field_wrapper_as, help_text, set_placeholder};
use crate::sanitize::strip_tags;

/// Build the bare `<input>` for a field: control type, placeholder, and
/// constraint attributes.
pub(crate) fn create_input(fd: &FieldDefinition) -> Element {
    let mut input = Element::new("input");
    input.set_attr("type", fd.render_type().input_type());
    set_placeholder(&mut input, fd);
    apply_constraints(fd, &mut input);
    input
}

fn create_default(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper(fd);
    wrapper.append_element(create_input(fd));
    wrapper
}

fn create_text_area(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper(fd);
    let mut textarea = Element::new("textarea");
    set_placeholder(&mut textarea, fd);
    wrapper.append_element(textarea);
    wrapper
}

fn create_select(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper(fd);
    let mut select = Element::new("select");
    if fd.required {
        select.set_flag("required");
    }
    select.set_attr("title", fd.tooltip.clone().unwrap_or_default());
    if fd.read_only {
        select.set_flag("readonly");
    }
    if fd.is_multi_valued() {
        select.set_flag("multiple");
    }

    let mut placeholder_index = None;
    if let Some(text) = &fd.placeholder {
        let mut ph = Element::new("option");
        ph.append_text(text);
        ph.set_flag("disabled");
        ph.set_attr("value", "");
        placeholder_index = Some(select.children.len());
        select.append_element(ph);
    }

    let mut option_selected = false;
    for (index, option_value) in fd.options.iter().enumerate() {
        let label = fd.option_label(index).trim().to_string();
        let raw = option_value.to_text();
        let trimmed = raw.trim();
        // An empty option value falls back to the label, like the
        // authoring dialect expects.
        let value_attr = if trimmed.is_empty() { label.as_str() } else { trimmed };

        let mut option = Element::new("option");
        option.set_attr("value", value_attr);
        option.append_text(&label);
        if fd
            .value
            .as_ref()
            .is_some_and(|value| value.matches_option(value_attr))
        {
            option.set_flag("selected");
            option_selected = true;
        }
        select.append_element(option);
    }

    // The placeholder is only preselected when no real option matched.
    if !option_selected
        && let Some(index) = placeholder_index
        && let Some(Node::Element(ph)) = select.children.get_mut(index)
    {
        ph.set_flag("selected");
    }

    wrapper.append_element(select);
    wrapper
}

fn create_radio_or_checkbox(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper(fd);
    let mut input = create_input(fd);
    if let Some(checked_value) = fd.options.first() {
        input.set_attr("value", checked_value.to_text());
    }
    // The unchecked sentinel is a pass-through; the submit transform
    // owns its interpretation.
    if let Some(unchecked) = fd.options.get(1) {
        input.set_attr("data-unchecked-value", unchecked.to_text());
    }
    wrapper.prepend_element(input);
    wrapper
}

pub(crate) fn create_fieldset(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper_as(fd, "fieldset", "legend");
    if !fd.id.is_empty() {
        wrapper.set_attr("id", &fd.id);
    }
    if !fd.name.is_empty() {
        wrapper.set_attr("name", &fd.name);
    }
    if fd.field_type.as_deref() == Some("panel") {
        wrapper.add_class("form-panel-wrapper");
    }
    wrapper
}

fn create_radio_or_checkbox_group(fd: &FieldDefinition) -> Element {
    let mut wrapper = create_fieldset(fd);
    let member_kind = fd
        .field_type
        .as_deref()
        .and_then(|tag| tag.split('-').next())
        .unwrap_or("radio")
        .to_string();

    for (index, option_value) in fd.options.iter().enumerate() {
        // Member ids derive from the group name and position, so two
        // renders of the same definition agree.
        let member_id = format!("{}-{}", fd.name, index);
        let member = FieldDefinition {
            name: fd.name.clone(),
            id: member_id.clone(),
            label: Some(Label {
                value: fd.option_label(index),
                ..Default::default()
            }),
            field_type: Some(member_kind.clone()),
            options: vec![option_value.clone()],
            required: fd.required,
            ..Default::default()
        };

        let mut element = create_radio_or_checkbox(&member);
        element.remove_class("field-wrapper");
        element.remove_class(&format!("form-{}", fd.name));

        let option_text = option_value.to_text();
        if let Some(input) = element.first_control_mut() {
            input.set_attr("id", &member_id);
            if let Some(tag) = &fd.field_type {
                input.set_attr("data-field-type", tag);
            }
            // The group id is unique form-wide, so it becomes the shared
            // input name that groups the members.
            input.set_attr("name", &fd.id);
            if fd
                .value
                .as_ref()
                .is_some_and(|value| value.matches_option(&option_text))
            {
                input.set_flag("checked");
            }
            let carries_required =
                member_kind == "checkbox" || (member_kind == "radio" && index == 0);
            if fd.required && carries_required {
                input.set_attr("required", "required");
            }
        }
        wrapper.append_element(element);
    }

    let mut validation = ValidationState::required(fd.required);
    validation.messages = fd.constraint_messages.clone();
    wrapper.validation = Some(validation);
    wrapper
}

fn create_plain_text(fd: &FieldDefinition) -> Element {
    let mut paragraph = Element::new("p");
    let text = fd.value.as_ref().map(|value| value.to_text()).unwrap_or_default();
    if fd.rich_text {
        paragraph.append(Node::Markup(strip_tags(&text)));
    } else {
        paragraph.append_text(text);
    }
    let mut wrapper = field_wrapper(fd);
    if !fd.id.is_empty() {
        wrapper.set_attr("id", &fd.id);
    }
    wrapper.replace_children(Node::Element(paragraph));
    wrapper
}

fn create_file_field(fd: &FieldDefinition, collab: &Collaborators) -> Element {
    let mut wrapper = field_wrapper(fd);
    wrapper.append_element(create_input(fd));
    collab.files.decorate(fd, &mut wrapper);
    wrapper
}

fn create_fragment(fd: &FieldDefinition) -> Element {
    let mut wrapper = field_wrapper(fd);
    if !fd.id.is_empty() {
        wrapper.set_attr("id", &fd.id);
    }
    wrapper
}

/// Render one field: dispatch to its kind's renderer, falling through to
/// the generic input, then attach help text when a description exists.
pub fn render_field(fd: &FieldDefinition, collab: &Collaborators) -> Element {
    let mut element = match fd.kind() {
        FieldKind::DropDown => create_select(fd),
        FieldKind::PlainText => create_plain_text(fd),
        FieldKind::Checkbox | FieldKind::Radio => create_radio_or_checkbox(fd),
        FieldKind::Button => collab.buttons.render(fd),
        FieldKind::Multiline => create_text_area(fd),
        FieldKind::Panel => create_fieldset(fd),
        FieldKind::RadioGroup | FieldKind::CheckboxGroup => create_radio_or_checkbox_group(fd),
        FieldKind::File => create_file_field(fd, collab),
        FieldKind::Fragment => create_fragment(fd),
        FieldKind::Default | FieldKind::Captcha => create_default(fd),
    };

    if let Some(description) = &fd.description {
        element.prepend_element(help_text(fd));
        // Kept alongside the help node so error display can restore it.
        element.set_attr("data-description", description);
    }
    element
}
