//! Integration tests: wizard layout applied by the rendition engine.

use formwright::{Element, FormRenderer};
use formwright_wizard::WizardLayout;

#[tokio::test]
async fn wizard_panel_is_transformed_after_its_children_render() {
    let definition = example_forms::enrollment_wizard();
    let renderer = FormRenderer::new().with_layout(WizardLayout);
    let form = renderer.create_form(&definition).await;

    assert!(form.faults.is_empty());

    let wizard = form.element.child_elements().next().unwrap();
    assert!(wizard.has_class("wizard"));

    let steps: Vec<&Element> = wizard
        .child_elements()
        .filter(|child| child.has_class("wizard-step"))
        .collect();
    assert_eq!(steps.len(), 2);
    assert!(steps[0].has_class("current-wizard-step"));
    assert!(!steps[1].has_class("current-wizard-step"));

    // Navigation lands after the steps, with the step count recorded.
    let nav = wizard.child_elements().last().unwrap();
    assert!(nav.has_class("wizard-button-wrapper"));
    assert_eq!(wizard.attr("data-wizard-steps"), Some("2"));
}

#[tokio::test]
async fn non_wizard_panels_are_untouched() {
    let definition = example_forms::contact();
    let renderer = FormRenderer::new().with_layout(WizardLayout);
    let form = renderer.create_form(&definition).await;

    assert!(!form.element.has_class("wizard"));
    assert!(!form.to_html().contains("wizard-step"));
}
