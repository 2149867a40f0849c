//! The cross-cutting decoration pass applied after a primitive renderer.

use formwright_types::{
    Element, FieldDefinition, MaskedValue, RenderType, ValidationState,
};

/// Decorate the primary control inside a rendered field: identity,
/// accessibility, state flags, and value assignment.
///
/// Grouped radio/checkbox fields never pass through here; their group
/// renderer performs the equivalent member decoration itself.
pub fn decorate_input(field: &FieldDefinition, element: &mut Element) {
    let render_type = field.render_type();
    let masked = matches!(render_type, RenderType::Number | RenderType::Date)
        && field.display_format.is_some();

    let Some(input) = element.first_control_mut() else {
        return;
    };

    input.set_attr("id", &field.id);
    input.set_attr("name", &field.name);
    if let Some(tooltip) = &field.tooltip {
        input.set_attr("title", tooltip);
    }
    if field.read_only {
        input.set_flag("readonly");
    }
    input.set_attr(
        "autocomplete",
        field.auto_complete.clone().unwrap_or_else(|| "off".into()),
    );
    if field.enabled == Some(false) {
        input.set_flag("disabled");
    }

    if masked {
        // Formatted fields rest as text showing the display value; the
        // raw value and native type stay recoverable for the focus swap.
        let edit_value = field
            .value
            .as_ref()
            .map(|value| value.to_text())
            .unwrap_or_default();
        let display_value = field.display_value.clone().unwrap_or_default();
        input.masked = Some(MaskedValue {
            edit_value,
            display_value: display_value.clone(),
            edit_type: render_type.input_type().to_string(),
        });
        input.set_attr("type", "text");
        input.set_attr("value", display_value);
    } else if input.attr("type") == Some("file") {
        // File inputs take no value; multiplicity comes from the type.
        if field.value_type.as_deref() == Some("file[]") {
            input.set_flag("multiple");
        }
    } else if matches!(input.attr("type"), Some("radio") | Some("checkbox")) {
        let value = field
            .options
            .first()
            .map(|option| option.to_text())
            .or_else(|| {
                field
                    .value
                    .as_ref()
                    .map(|value| value.to_text())
                    .filter(|text| !text.is_empty())
            })
            .unwrap_or_else(|| "on".into());
        input.set_attr("value", value);
        if field
            .checked
            .as_ref()
            .is_some_and(|checked| checked.is_true_flag())
        {
            input.set_flag("checked");
        }
    } else {
        input.set_attr(
            "value",
            field
                .value
                .as_ref()
                .map(|value| value.to_text())
                .unwrap_or_default(),
        );
    }

    if field.required {
        input.set_attr("required", "required");
    }
    if field.description.is_some() {
        input.set_attr("aria-describedby", format!("{}-description", field.id));
    }

    let mut validation = ValidationState::required(field.required);
    validation.min_items = field.min_items;
    validation.max_items = field.max_items;
    validation.max_file_size = field.max_file_size_value();
    validation.messages = field.constraint_messages.clone();
    element.validation = Some(validation);
}

/// Add the layout class for a declared column span.
pub fn apply_column_span(field: &FieldDefinition, element: &mut Element) {
    if let Some(span) = &field.column_span {
        let span = span.to_text();
        if !span.is_empty() {
            element.add_class(format!("col-{span}"));
        }
    }
}
