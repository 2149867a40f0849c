//! Top-level form assembly.

use std::collections::BTreeMap;

use formwright_types::{Element, FieldDefinition, FormDefinition};

use crate::engine::{FormRenderer, RenderFault, RenderReport};
use crate::validity::{Violation, validate_tree};

/// A fully assembled form: the element tree plus what the render pass
/// captured along the way.
#[derive(Debug)]
pub struct RenderedForm {
    /// The form root, ready for attachment; carries the submission
    /// action as a data attribute.
    pub element: Element,

    /// The captcha field captured out of the rendered flow, if any.
    pub captcha: Option<FieldDefinition>,

    /// Non-fatal faults collected while rendering.
    pub faults: Vec<RenderFault>,
}

impl RenderedForm {
    /// The submission action path.
    pub fn action(&self) -> Option<&str> {
        self.element.attr("data-action")
    }

    /// Serialize the form tree to HTML.
    pub fn to_html(&self) -> String {
        self.element.to_html()
    }

    /// Validate every control against a value map keyed by control id.
    ///
    /// Controls absent from the map validate their rendered value.
    pub fn validate(&self, values: &BTreeMap<String, String>) -> BTreeMap<String, Vec<Violation>> {
        validate_tree(&self.element, values)
    }
}

impl FormRenderer {
    /// Assemble a complete form from a definition: build the root, run
    /// the rendition engine, initialize the captcha integration, and
    /// hand off to the rule engine after the configured delay.
    ///
    /// Native validation bubbles are disabled on the root; callers drive
    /// validation through [`RenderedForm::validate`].
    pub async fn create_form(&self, definition: &FormDefinition) -> RenderedForm {
        let mut form = Element::new("form");
        let action = self
            .options
            .action
            .as_deref()
            .or(definition.action.as_deref());
        if let Some(action) = action {
            form.set_attr("data-action", action);
        }
        form.set_flag("novalidate");

        let report = self.render_panel(&definition.root, &mut form).await;
        let RenderReport {
            captcha,
            mut faults,
        } = report;

        if let Some(captcha_field) = &captcha
            && let Some(provider) = &self.collab.captcha
        {
            let site_key = captcha_site_key(captcha_field);
            if let Err(source) = provider.load(site_key.as_deref(), &captcha_field.id, &mut form) {
                tracing::warn!(field = %captcha_field.id, error = %source, "captcha failed to load");
                faults.push(RenderFault::Captcha { source });
            }
        }

        if let Some(rules) = &self.collab.rules {
            tokio::time::sleep(self.options.rule_delay).await;
            if let Err(source) = rules
                .load_rules(
                    definition,
                    &mut form,
                    captcha.as_ref(),
                    self,
                    definition.data.as_ref(),
                )
                .await
            {
                tracing::warn!(error = %source, "rule engine failed to load");
                faults.push(RenderFault::Rules { source });
            }
        }

        RenderedForm {
            element: form,
            captcha,
            faults,
        }
    }
}

/// The site key configured on a captured captcha field.
fn captcha_site_key(field: &FieldDefinition) -> Option<String> {
    field
        .properties
        .as_ref()?
        .get("fd:captcha")?
        .get("config")?
        .get("siteKey")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_key_is_read_from_the_properties_bag() {
        let field = FieldDefinition {
            properties: Some(serde_json::json!({
                "fd:captcha": {"config": {"siteKey": "sk-123"}}
            })),
            ..Default::default()
        };
        assert_eq!(captcha_site_key(&field).as_deref(), Some("sk-123"));
        assert_eq!(captcha_site_key(&FieldDefinition::default()), None);
    }
}
