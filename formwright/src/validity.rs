//! Constraint evaluation against rendered controls.
//!
//! This is the client-side validation surface: given a control and a
//! candidate value, produce per-constraint violations whose text prefers
//! the field's configured message over the built-in default.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use formwright_types::{Element, ValidationState};
use regex::Regex;

/// A validation constraint kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Pattern,
    MinLength,
    MaxLength,
    Minimum,
    Maximum,
}

impl Constraint {
    /// The key this constraint uses in `constraintMessages`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern => "pattern",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
        }
    }

    fn default_message(self, bound: &str) -> String {
        match self {
            Self::Required => "Please fill in this field.".to_string(),
            Self::Pattern => "Please match the requested format.".to_string(),
            Self::MinLength => {
                format!("Please lengthen this text to {bound} characters or more.")
            }
            Self::MaxLength => {
                format!("Please shorten this text to {bound} characters or less.")
            }
            Self::Minimum => format!("Value must be greater than or equal to {bound}."),
            Self::Maximum => format!("Value must be less than or equal to {bound}."),
        }
    }
}

/// One failed constraint on a control.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub constraint: Constraint,
    pub message: String,
}

fn violation(constraint: Constraint, state: Option<&ValidationState>, bound: &str) -> Violation {
    let message = state
        .and_then(|state| state.message(constraint.key()))
        .map(str::to_string)
        .unwrap_or_else(|| constraint.default_message(bound));
    Violation {
        constraint,
        message,
    }
}

/// Evaluate a rendered control against a candidate value.
///
/// `state` is the structured validation config from the control's
/// wrapper; an empty value only violates `required`.
pub fn check_control(
    control: &Element,
    state: Option<&ValidationState>,
    value: &str,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let required =
        control.attr("required").is_some() || state.is_some_and(|state| state.required);

    if value.is_empty() {
        if required {
            violations.push(violation(Constraint::Required, state, ""));
        }
        return violations;
    }

    if let Some(pattern) = control.attr("pattern")
        && let Some(re) = anchored(pattern)
        && !re.is_match(value)
    {
        violations.push(violation(Constraint::Pattern, state, pattern));
    }

    let length = value.chars().count();
    if let Some(min) = parse_usize(control.attr("minlength"))
        && length < min
    {
        violations.push(violation(Constraint::MinLength, state, &min.to_string()));
    }
    if let Some(max) = parse_usize(control.attr("maxlength"))
        && length > max
    {
        violations.push(violation(Constraint::MaxLength, state, &max.to_string()));
    }

    if let Ok(number) = value.trim().parse::<f64>() {
        if let Some(min) = bound(control, "Min")
            && number < min
        {
            violations.push(violation(Constraint::Minimum, state, &min.to_string()));
        }
        if let Some(max) = bound(control, "Max")
            && number > max
        {
            violations.push(violation(Constraint::Maximum, state, &max.to_string()));
        }
    }

    violations
}

/// Validate every control in a rendered tree against a value map keyed by
/// control id. Controls absent from the map validate their rendered
/// `value` attribute. Returns only the controls with violations.
pub fn validate_tree(
    root: &Element,
    values: &BTreeMap<String, String>,
) -> BTreeMap<String, Vec<Violation>> {
    let mut out = BTreeMap::new();
    walk(root, None, values, &mut out);
    out
}

fn walk<'a>(
    element: &'a Element,
    inherited: Option<&'a ValidationState>,
    values: &BTreeMap<String, String>,
    out: &mut BTreeMap<String, Vec<Violation>>,
) {
    let state = element.validation.as_ref().or(inherited);
    if element.is_control()
        && let Some(id) = element.attr("id")
    {
        let value = values
            .get(id)
            .map(String::as_str)
            .or_else(|| element.attr("value"))
            .unwrap_or("");
        let violations = check_control(element, state, value);
        if !violations.is_empty() {
            out.insert(id.to_string(), violations);
        }
    }
    for child in element.child_elements() {
        walk(child, state, values, out);
    }
}

fn parse_usize(attr: Option<&str>) -> Option<usize> {
    attr.and_then(|value| value.parse().ok())
}

/// Numeric bound attribute, tolerating the dialect's capitalized names.
fn bound(control: &Element, name: &str) -> Option<f64> {
    control
        .attr(name)
        .or_else(|| control.attr(&name.to_ascii_lowercase()))
        .and_then(|value| value.parse().ok())
}

fn anchored(pattern: &str) -> Option<Regex> {
    static CACHE: OnceLock<std::sync::Mutex<BTreeMap<String, Option<Regex>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| std::sync::Mutex::new(BTreeMap::new()));
    let mut cache = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(pattern.to_string())
        .or_insert_with(|| Regex::new(&format!("^(?:{pattern})$")).ok())
        .clone()
}
