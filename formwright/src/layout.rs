//! Layout extensions: post-processing transforms applied to rendered
//! panels based on their declared layout tag.
//!
//! Extensions are registered explicitly rather than discovered at
//! runtime; the registry tries predicates in registration order and
//! applies the first match. A failing transform is reported without
//! discarding the already-rendered panel content.

use formwright_types::{Element, FieldDefinition};

/// A panel layout transform.
///
/// Implementations live in their own crates (`formwright-wizard` ships
/// the wizard behavior) and plug in through
/// [`FormRenderer::with_layout`](crate::FormRenderer::with_layout).
pub trait LayoutExtension: Send + Sync {
    /// Stable name used in logs and fault reports.
    fn name(&self) -> &'static str;

    /// Whether this extension handles the given panel.
    fn matches(&self, panel: &FieldDefinition) -> bool;

    /// Transform the panel's rendered container.
    fn apply(&self, panel: &FieldDefinition, container: &mut Element) -> anyhow::Result<()>;
}

/// A layout transform failure; non-fatal for the panel it ran on.
#[derive(Debug, thiserror::Error)]
#[error("layout '{layout}' failed: {source}")]
pub struct LayoutError {
    pub layout: &'static str,
    pub source: anyhow::Error,
}

/// Ordered set of registered layout extensions.
#[derive(Default)]
pub struct LayoutRegistry {
    entries: Vec<Box<dyn LayoutExtension>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extension; earlier registrations win on overlap.
    pub fn register(&mut self, extension: impl LayoutExtension + 'static) {
        self.entries.push(Box::new(extension));
    }

    /// Apply the first matching extension. `Ok(None)` when nothing
    /// matched.
    pub fn apply(
        &self,
        panel: &FieldDefinition,
        container: &mut Element,
    ) -> Result<Option<&'static str>, LayoutError> {
        let Some(extension) = self.entries.iter().find(|entry| entry.matches(panel)) else {
            return Ok(None);
        };
        extension
            .apply(panel, container)
            .map_err(|source| LayoutError {
                layout: extension.name(),
                source,
            })?;
        Ok(Some(extension.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagging(&'static str);

    impl LayoutExtension for Tagging {
        fn name(&self) -> &'static str {
            self.0
        }

        fn matches(&self, panel: &FieldDefinition) -> bool {
            panel
                .layout_type
                .as_deref()
                .is_some_and(|tag| tag.ends_with(self.0))
        }

        fn apply(&self, _panel: &FieldDefinition, container: &mut Element) -> anyhow::Result<()> {
            container.add_class(self.0);
            Ok(())
        }
    }

    struct Failing;

    impl LayoutExtension for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn matches(&self, _panel: &FieldDefinition) -> bool {
            true
        }

        fn apply(&self, _panel: &FieldDefinition, _container: &mut Element) -> anyhow::Result<()> {
            anyhow::bail!("module unavailable")
        }
    }

    #[test]
    fn first_match_wins_and_no_match_is_a_noop() {
        let mut registry = LayoutRegistry::new();
        registry.register(Tagging("accordion"));
        registry.register(Tagging("wizard"));

        let panel = FieldDefinition {
            layout_type: Some("core/fd/components/wizard".into()),
            ..Default::default()
        };
        let mut container = Element::new("fieldset");
        let applied = registry.apply(&panel, &mut container).unwrap();
        assert_eq!(applied, Some("wizard"));
        assert!(container.has_class("wizard"));

        let plain = FieldDefinition::default();
        let mut container = Element::new("fieldset");
        assert_eq!(registry.apply(&plain, &mut container).unwrap(), None);
    }

    #[test]
    fn failures_surface_with_the_extension_name() {
        let mut registry = LayoutRegistry::new();
        registry.register(Failing);
        let mut container = Element::new("fieldset");
        let err = registry
            .apply(&FieldDefinition::default(), &mut container)
            .unwrap_err();
        assert_eq!(err.layout, "failing");
    }
}
