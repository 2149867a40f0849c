//! Collaborator seams: external integrations consumed as trait objects.
//!
//! The core renders forms; fetching fragments, decorating file widgets,
//! CAPTCHA, and rule wiring are someone else's business. Each boundary is
//! a trait with a shippable default so the renderer works out of the box,
//! and errors cross the seam as `anyhow::Error`.

use std::sync::OnceLock;

use async_trait::async_trait;
use formwright_types::{Element, FieldDefinition, FormDefinition, escape_html};
use regex::Regex;

use crate::FormRenderer;
use crate::field::field_wrapper;

/// Fetches fragment bodies referenced by fragment fields.
///
/// `Ok(None)` means the fragment responded without content (non-2xx);
/// the wrapper is left empty. Errors are recorded as non-fatal faults.
#[async_trait]
pub trait FragmentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> anyhow::Result<Option<String>>;
}

/// Default fetcher backed by an HTTP client.
#[derive(Debug, Default, Clone)]
pub struct HttpFragmentFetcher {
    client: reqwest::Client,
}

impl HttpFragmentFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FragmentFetcher for HttpFragmentFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}

/// Rewrites hyperlinks found inside fetched fragment markup.
///
/// Return `None` to keep a link unchanged.
pub trait LinkRewriter: Send + Sync {
    fn rewrite(&self, href: &str) -> Option<String>;
}

/// Default rewriter: every link stays as authored.
#[derive(Debug, Default, Clone)]
pub struct KeepLinks;

impl LinkRewriter for KeepLinks {
    fn rewrite(&self, _href: &str) -> Option<String> {
        None
    }
}

/// Run a [`LinkRewriter`] over every `href` in a markup string.
pub fn rewrite_links(markup: &str, rewriter: &dyn LinkRewriter) -> String {
    static HREF: OnceLock<Regex> = OnceLock::new();
    let href = HREF.get_or_init(|| Regex::new(r#"href="([^"]*)""#).unwrap());
    href.replace_all(markup, |caps: &regex::Captures<'_>| {
        match rewriter.rewrite(&caps[1]) {
            Some(rewritten) => format!(r#"href="{}""#, escape_html(&rewritten)),
            None => caps[0].to_string(),
        }
    })
    .into_owned()
}

/// Decorates a rendered file-upload field (drag-and-drop affordances,
/// file lists, and the like live behind this seam).
pub trait FileFieldDecorator: Send + Sync {
    fn decorate(&self, field: &FieldDefinition, wrapper: &mut Element);
}

/// Default file decoration: the bare input is left as-is.
#[derive(Debug, Default, Clone)]
pub struct PlainFileField;

impl FileFieldDecorator for PlainFileField {
    fn decorate(&self, _field: &FieldDefinition, _wrapper: &mut Element) {}
}

/// Builds button fields.
pub trait ButtonRenderer: Send + Sync {
    fn render(&self, field: &FieldDefinition) -> Element;
}

/// Default button: a wrapped `<button>` carrying the field label.
#[derive(Debug, Default, Clone)]
pub struct DefaultButtonRenderer;

impl ButtonRenderer for DefaultButtonRenderer {
    fn render(&self, field: &FieldDefinition) -> Element {
        let mut wrapper = field_wrapper(field);
        // The label is rendered on the button face, not beside it.
        wrapper.children.clear();
        let mut button = Element::new("button");
        button.set_attr("type", "button");
        button.add_class("button");
        if !field.id.is_empty() {
            button.set_attr("id", &field.id);
        }
        if let Some(text) = field.label_text() {
            button.append_text(text);
        }
        wrapper.append_element(button);
        wrapper
    }
}

/// CAPTCHA client boundary: constructed state lives behind the trait; the
/// renderer hands over the configured site key and the captured field id.
pub trait CaptchaProvider: Send + Sync {
    fn load(
        &self,
        site_key: Option<&str>,
        field_id: &str,
        form: &mut Element,
    ) -> anyhow::Result<()>;
}

/// Rule-engine boundary, invoked (deferred) after assembly with the
/// schema, the form tree, the captured captcha field, the renderer as a
/// re-render handle, and the definition's initial data.
#[async_trait]
pub trait RuleEngine: Send + Sync {
    async fn load_rules(
        &self,
        definition: &FormDefinition,
        form: &mut Element,
        captcha: Option<&FieldDefinition>,
        renderer: &FormRenderer,
        data: Option<&serde_json::Value>,
    ) -> anyhow::Result<()>;
}

/// The full collaborator set consumed by a renderer.
pub struct Collaborators {
    pub fragments: Box<dyn FragmentFetcher>,
    pub links: Box<dyn LinkRewriter>,
    pub files: Box<dyn FileFieldDecorator>,
    pub buttons: Box<dyn ButtonRenderer>,
    pub captcha: Option<Box<dyn CaptchaProvider>>,
    pub rules: Option<Box<dyn RuleEngine>>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            fragments: Box::new(HttpFragmentFetcher::default()),
            links: Box::new(KeepLinks),
            files: Box::new(PlainFileField),
            buttons: Box::new(DefaultButtonRenderer),
            captcha: None,
            rules: None,
        }
    }
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragments(mut self, fetcher: impl FragmentFetcher + 'static) -> Self {
        self.fragments = Box::new(fetcher);
        self
    }

    pub fn with_links(mut self, rewriter: impl LinkRewriter + 'static) -> Self {
        self.links = Box::new(rewriter);
        self
    }

    pub fn with_files(mut self, decorator: impl FileFieldDecorator + 'static) -> Self {
        self.files = Box::new(decorator);
        self
    }

    pub fn with_buttons(mut self, buttons: impl ButtonRenderer + 'static) -> Self {
        self.buttons = Box::new(buttons);
        self
    }

    pub fn with_captcha(mut self, captcha: impl CaptchaProvider + 'static) -> Self {
        self.captcha = Some(Box::new(captcha));
        self
    }

    pub fn with_rules(mut self, rules: impl RuleEngine + 'static) -> Self {
        self.rules = Some(Box::new(rules));
        self
    }
}
