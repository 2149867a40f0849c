//! Schema-constraint to control-attribute resolution.
//!
//! A single table maps each control kind to the schema attributes it can
//! carry and the attribute names they emit as. New control kinds are new
//! table rows, not new code paths. The emitted names keep the authoring
//! dialect's capitalization quirks (`Max`, `Min`, `Multiple`) because
//! downstream tooling matches on them.

use formwright_types::{Element, FieldDefinition, FieldValue, RenderType};

/// A schema attribute that can become a control attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaConstraint {
    MaxLength,
    MinLength,
    Pattern,
    Maximum,
    Minimum,
    Step,
    Accept,
    Multiple,
    MaxOccur,
    MinOccur,
}

impl SchemaConstraint {
    /// The constraint's value on a definition, skipping absent or falsy
    /// entries (zero, empty string, false) like the schema dialect does.
    fn read(self, fd: &FieldDefinition) -> Option<String> {
        match self {
            Self::MaxLength => nonzero(fd.max_length),
            Self::MinLength => nonzero(fd.min_length),
            Self::Pattern => fd.pattern.clone().filter(|s| !s.is_empty()),
            Self::Maximum => truthy_text(fd.maximum.as_ref()),
            Self::Minimum => truthy_text(fd.minimum.as_ref()),
            Self::Step => truthy_text(fd.step.as_ref()),
            Self::Accept => fd.accept.clone().filter(|s| !s.is_empty()),
            Self::Multiple => truthy_text(fd.multiple.as_ref()),
            Self::MaxOccur => fd.max_occur.filter(|n| *n != 0).map(|n| n.to_string()),
            Self::MinOccur => fd.min_occur.filter(|n| *n != 0).map(|n| n.to_string()),
        }
    }
}

fn nonzero(value: Option<u64>) -> Option<String> {
    value.filter(|n| *n != 0).map(|n| n.to_string())
}

fn truthy_text(value: Option<&FieldValue>) -> Option<String> {
    let value = value?;
    let falsy = match value {
        FieldValue::Bool(b) => !b,
        FieldValue::Number(n) => n.as_f64() == Some(0.0),
        FieldValue::String(s) => s.is_empty(),
        FieldValue::List(items) => items.is_empty(),
    };
    (!falsy).then(|| value.to_text())
}

type ConstraintRow = (&'static [RenderType], &'static [(SchemaConstraint, &'static str)]);

/// The single source of truth for schema-attribute to control-attribute
/// mapping.
static CONSTRAINT_TABLE: &[ConstraintRow] = &[
    (
        &[
            RenderType::Text,
            RenderType::Password,
            RenderType::Tel,
            RenderType::Email,
        ],
        &[
            (SchemaConstraint::MaxLength, "maxlength"),
            (SchemaConstraint::MinLength, "minlength"),
            (SchemaConstraint::Pattern, "pattern"),
        ],
    ),
    (
        &[RenderType::Number, RenderType::Range, RenderType::Date],
        &[
            (SchemaConstraint::Maximum, "Max"),
            (SchemaConstraint::Minimum, "Min"),
            (SchemaConstraint::Step, "step"),
        ],
    ),
    (
        &[RenderType::File],
        &[
            (SchemaConstraint::Accept, "accept"),
            (SchemaConstraint::Multiple, "Multiple"),
        ],
    ),
    (
        &[RenderType::Fieldset],
        &[
            (SchemaConstraint::MaxOccur, "data-max"),
            (SchemaConstraint::MinOccur, "data-min"),
        ],
    ),
];

/// Emit the constraint attributes applicable to this field's control kind.
///
/// Kinds without a table row carry no constraints.
pub fn apply_constraints(fd: &FieldDefinition, element: &mut Element) {
    let render_type = fd.render_type();
    let Some((_, pairs)) = CONSTRAINT_TABLE
        .iter()
        .find(|(types, _)| types.contains(&render_type))
    else {
        return;
    };
    for (constraint, attr) in *pairs {
        if let Some(value) = constraint.read(fd) {
            element.set_attr(*attr, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_constraints_emit_lowercase_names() {
        let fd = FieldDefinition {
            field_type: Some("text-input".into()),
            max_length: Some(10),
            min_length: Some(2),
            pattern: Some("[a-z]+".into()),
            ..Default::default()
        };
        let mut input = Element::new("input");
        apply_constraints(&fd, &mut input);
        assert_eq!(input.attr("maxlength"), Some("10"));
        assert_eq!(input.attr("minlength"), Some("2"));
        assert_eq!(input.attr("pattern"), Some("[a-z]+"));
    }

    #[test]
    fn numeric_constraints_keep_dialect_capitalization() {
        let fd = FieldDefinition {
            field_type: Some("number-input".into()),
            maximum: Some(100i64.into()),
            minimum: Some(1i64.into()),
            ..Default::default()
        };
        let mut input = Element::new("input");
        apply_constraints(&fd, &mut input);
        assert_eq!(input.attr("Max"), Some("100"));
        assert_eq!(input.attr("Min"), Some("1"));
    }

    #[test]
    fn absent_and_falsy_values_are_skipped() {
        let fd = FieldDefinition {
            field_type: Some("text-input".into()),
            max_length: Some(0),
            ..Default::default()
        };
        let mut input = Element::new("input");
        apply_constraints(&fd, &mut input);
        assert_eq!(input.attr("maxlength"), None);
        assert_eq!(input.attr("pattern"), None);
    }

    #[test]
    fn unmapped_kinds_get_no_constraints() {
        let fd = FieldDefinition {
            field_type: Some("drop-down".into()),
            max_length: Some(10),
            ..Default::default()
        };
        let mut select = Element::new("select");
        apply_constraints(&fd, &mut select);
        assert_eq!(select.attr("maxlength"), None);
    }

    #[test]
    fn panels_carry_occurrence_bounds() {
        let fd = FieldDefinition {
            field_type: Some("panel".into()),
            min_occur: Some(1),
            max_occur: Some(5),
            ..Default::default()
        };
        let mut fieldset = Element::new("fieldset");
        apply_constraints(&fd, &mut fieldset);
        assert_eq!(fieldset.attr("data-min"), Some("1"));
        assert_eq!(fieldset.attr("data-max"), Some("5"));
    }
}
