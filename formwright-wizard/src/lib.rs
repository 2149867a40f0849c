//! # formwright-wizard
//!
//! Wizard layout extension for formwright.
//!
//! Panels whose layout type tag ends in `wizard` are transformed into a
//! multi-step view: each rendered child becomes a step, the first step
//! is current, and prev/next navigation is appended to the panel.
//!
//! ## Example
//!
//! ```rust,ignore
//! use formwright::FormRenderer;
//! use formwright_wizard::WizardLayout;
//!
//! let renderer = FormRenderer::new().with_layout(WizardLayout);
//! ```

use formwright::{Element, FieldDefinition, LayoutExtension};

/// The wizard layout transform.
#[derive(Debug, Default, Clone)]
pub struct WizardLayout;

impl LayoutExtension for WizardLayout {
    fn name(&self) -> &'static str {
        "wizard"
    }

    fn matches(&self, panel: &FieldDefinition) -> bool {
        panel
            .layout_type
            .as_deref()
            .is_some_and(|tag| tag.ends_with("wizard"))
    }

    fn apply(&self, _panel: &FieldDefinition, container: &mut Element) -> anyhow::Result<()> {
        container.add_class("wizard");

        let mut steps = 0;
        for child in container.child_elements_mut() {
            // The panel's legend and help text are chrome, not steps.
            if child.tag() == "legend" || child.has_class("field-description") {
                continue;
            }
            child.add_class("wizard-step");
            if steps == 0 {
                child.add_class("current-wizard-step");
            }
            steps += 1;
        }
        container.set_attr("data-wizard-steps", steps.to_string());

        let mut nav = Element::new("div");
        nav.add_class("wizard-button-wrapper");
        nav.append_element(wizard_button("wizard-button-prev", "Back"));
        nav.append_element(wizard_button("wizard-button-next", "Next"));
        container.append_element(nav);

        Ok(())
    }
}

fn wizard_button(class: &str, text: &str) -> Element {
    let mut button = Element::new("button");
    button.set_attr("type", "button");
    button.add_class(class);
    button.append_text(text);
    button
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_panel() -> FieldDefinition {
        FieldDefinition {
            layout_type: Some("forms-components/wizard".into()),
            ..Default::default()
        }
    }

    fn container_with_steps(count: usize) -> Element {
        let mut container = Element::new("fieldset");
        for index in 0..count {
            let mut step = Element::new("fieldset");
            step.set_attr("id", format!("step-{index}"));
            container.append_element(step);
        }
        container
    }

    #[test]
    fn matches_any_tag_ending_in_wizard() {
        assert!(WizardLayout.matches(&wizard_panel()));
        assert!(!WizardLayout.matches(&FieldDefinition {
            layout_type: Some("accordion".into()),
            ..Default::default()
        }));
        assert!(!WizardLayout.matches(&FieldDefinition::default()));
    }

    #[test]
    fn first_step_is_current() {
        let mut container = container_with_steps(3);
        WizardLayout.apply(&wizard_panel(), &mut container).unwrap();

        assert!(container.has_class("wizard"));
        assert_eq!(container.attr("data-wizard-steps"), Some("3"));

        let children: Vec<&Element> = container.child_elements().collect();
        assert!(children[0].has_class("current-wizard-step"));
        assert!(children[1].has_class("wizard-step"));
        assert!(!children[1].has_class("current-wizard-step"));
    }

    #[test]
    fn navigation_is_appended_last() {
        let mut container = container_with_steps(2);
        WizardLayout.apply(&wizard_panel(), &mut container).unwrap();

        let nav = container.child_elements().last().unwrap();
        assert!(nav.has_class("wizard-button-wrapper"));
        assert_eq!(nav.child_elements().count(), 2);
    }

    #[test]
    fn empty_panels_still_get_wizard_chrome() {
        let mut container = Element::new("fieldset");
        WizardLayout.apply(&wizard_panel(), &mut container).unwrap();
        assert_eq!(container.attr("data-wizard-steps"), Some("0"));
    }
}
