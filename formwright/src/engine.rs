//! The recursive rendition engine.
//!
//! For every item in a panel: normalize the absent value, capture captcha
//! fields, render, decorate, apply the column span, and append in schema
//! order. Nested panels and fragment bodies are completed concurrently
//! and joined before the panel's layout extension runs, so a panel is
//! fully populated when its transform sees it. Faults in one subtree
//! never abort siblings or ancestors.

use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use url::Url;

use formwright_types::{Element, FieldDefinition, FieldKind, FieldValue, Node};

use crate::collab::{Collaborators, rewrite_links};
use crate::decorate::{apply_column_span, decorate_input};
use crate::layout::{LayoutError, LayoutExtension, LayoutRegistry};
use crate::options::RenderOptions;
use crate::render::render_field;

/// A non-fatal problem encountered during rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderFault {
    /// A fragment subtree stayed empty because its body could not be
    /// loaded.
    #[error("fragment '{id}' could not be loaded: {reason}")]
    Fragment { id: String, reason: String },

    /// A layout transform failed on an otherwise rendered panel.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The captcha integration failed to initialize.
    #[error("captcha integration failed: {source}")]
    Captcha { source: anyhow::Error },

    /// The rule engine failed to load.
    #[error("rule engine failed to load: {source}")]
    Rules { source: anyhow::Error },
}

/// What a render pass produced besides the tree itself.
#[derive(Debug, Default)]
pub struct RenderReport {
    /// The captcha field captured out of the rendered flow; with several
    /// in one schema, the last one encountered wins.
    pub captcha: Option<FieldDefinition>,

    /// Non-fatal faults, in encounter order.
    pub faults: Vec<RenderFault>,
}

impl RenderReport {
    fn merge(&mut self, other: RenderReport) {
        if other.captcha.is_some() {
            self.captcha = other.captcha;
        }
        self.faults.extend(other.faults);
    }
}

/// The rendition engine: owns options, layout registry, and collaborator
/// seams for one renderer instance. No state is shared across instances,
/// so rendering several forms concurrently is safe.
#[derive(Default)]
pub struct FormRenderer {
    pub(crate) options: RenderOptions,
    pub(crate) layouts: LayoutRegistry,
    pub(crate) collab: Collaborators,
}

impl FormRenderer {
    /// A renderer with default options and collaborators and no layout
    /// extensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a layout extension.
    pub fn with_layout(mut self, extension: impl LayoutExtension + 'static) -> Self {
        self.layouts.register(extension);
        self
    }

    /// Replace the collaborator set.
    pub fn with_collaborators(mut self, collab: Collaborators) -> Self {
        self.collab = collab;
        self
    }

    /// The renderer's options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a panel's items into `container`.
    ///
    /// Children appear in schema order; asynchronous content (nested
    /// panels, fragment bodies) is joined before the layout extension
    /// runs on the completed container.
    pub fn render_panel<'a>(
        &'a self,
        panel: &'a FieldDefinition,
        container: &'a mut Element,
    ) -> BoxFuture<'a, RenderReport> {
        async move {
            let mut report = RenderReport::default();
            let mut staged = Vec::new();

            for item in &panel.items {
                let mut field = item.clone();
                // Absent values render as empty strings; this working
                // copy is the one place a definition is adjusted.
                if field.value.is_none() {
                    field.value = Some(FieldValue::empty());
                }

                if field.kind() == FieldKind::Captcha {
                    report.captcha = Some(field);
                    continue;
                }

                let mut element = render_field(&field, &self.collab);
                if !field.kind().is_group() {
                    decorate_input(&field, &mut element);
                }
                apply_column_span(&field, &mut element);
                staged.push((field, element));
            }

            let completed = join_all(
                staged
                    .into_iter()
                    .map(|(field, element)| self.complete_field(field, element)),
            )
            .await;
            for (element, child_report) in completed {
                report.merge(child_report);
                container.append_element(element);
            }

            match self.layouts.apply(panel, container) {
                Ok(Some(layout)) => {
                    tracing::debug!(layout, panel = %panel.id, "layout applied");
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(panel = %panel.id, error = %err, "layout transform failed");
                    report.faults.push(err.into());
                }
            }

            report
        }
        .boxed()
    }

    /// Finish a staged sibling: recurse into panels, load fragment
    /// bodies, pass everything else through.
    async fn complete_field(
        &self,
        field: FieldDefinition,
        mut element: Element,
    ) -> (Element, RenderReport) {
        let mut report = RenderReport::default();
        match field.kind() {
            FieldKind::Panel => {
                let child_report = self.render_panel(&field, &mut element).await;
                report.merge(child_report);
            }
            FieldKind::Fragment => {
                if let Some(fault) = self.inject_fragment(&field, &mut element).await {
                    report.faults.push(fault);
                }
            }
            _ => {}
        }
        (element, report)
    }

    async fn inject_fragment(
        &self,
        field: &FieldDefinition,
        element: &mut Element,
    ) -> Option<RenderFault> {
        let reference = field
            .value
            .as_ref()
            .map(|value| value.to_text())
            .unwrap_or_default();
        if reference.is_empty() {
            return None;
        }

        let url = match fragment_url(&self.options.origin, &reference) {
            Ok(url) => url,
            Err(err) => {
                return Some(RenderFault::Fragment {
                    id: field.id.clone(),
                    reason: err.to_string(),
                });
            }
        };

        match self.collab.fragments.fetch(&url).await {
            Ok(Some(body)) => {
                let body = rewrite_links(&body, self.collab.links.as_ref());
                element.replace_children(Node::Markup(body));
                None
            }
            Ok(None) => {
                tracing::debug!(id = %field.id, %url, "fragment returned no content");
                None
            }
            Err(err) => {
                tracing::warn!(id = %field.id, %url, error = %err, "fragment fetch failed");
                Some(RenderFault::Fragment {
                    id: field.id.clone(),
                    reason: err.to_string(),
                })
            }
        }
    }
}

/// Resolve a fragment reference against the configured origin and apply
/// the `.plain.html` suffix convention.
fn fragment_url(origin: &str, reference: &str) -> Result<String, url::ParseError> {
    let resolved = Url::parse(origin)?.join(reference)?;
    let path = resolved.path().to_string();
    let path = if path.ends_with(".html") {
        path.replacen(".html", ".plain.html", 1)
    } else {
        format!("{path}.plain.html")
    };
    let mut with_suffix = resolved;
    with_suffix.set_path(&path);
    Ok(with_suffix.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_urls_get_the_plain_suffix() {
        let url = fragment_url("https://forms.example", "/fragments/terms").unwrap();
        assert_eq!(url, "https://forms.example/fragments/terms.plain.html");

        let url = fragment_url("https://forms.example", "/fragments/terms.html").unwrap();
        assert_eq!(url, "https://forms.example/fragments/terms.plain.html");
    }

    #[test]
    fn report_merge_keeps_the_last_captcha() {
        let mut report = RenderReport {
            captcha: Some(FieldDefinition {
                id: "first".into(),
                ..Default::default()
            }),
            faults: Vec::new(),
        };
        report.merge(RenderReport::default());
        assert_eq!(report.captcha.as_ref().unwrap().id, "first");

        report.merge(RenderReport {
            captcha: Some(FieldDefinition {
                id: "second".into(),
                ..Default::default()
            }),
            faults: Vec::new(),
        });
        assert_eq!(report.captcha.as_ref().unwrap().id, "second");
    }
}
