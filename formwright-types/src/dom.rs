use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::{MaskedValue, ValidationState};

/// Tags serialized without children or a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// Tags counted as interactive controls by decoration and validation.
const CONTROL_TAGS: &[&str] = &["input", "textarea", "select"];

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Plain text; escaped on serialization.
    Text(String),
    /// Pre-sanitized markup injected verbatim (rich text, fragments).
    Markup(String),
}

/// An element of the rendered form tree.
///
/// This is an owned value tree, not a live document: renderers build it,
/// decoration passes mutate it, and the caller serializes or walks it.
/// Attributes are kept sorted so two renders of the same definition are
/// structurally identical.
///
/// Two concerns that browsers smuggle through `data-*` attributes are
/// structured fields here instead: [`ValidationState`] (occurrence bounds,
/// file-size cap, per-constraint messages) and [`MaskedValue`] (the raw
/// value behind a formatted display value).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Structured validation configuration, if any.
    pub validation: Option<ValidationState>,
    /// Masked edit/display state, if any.
    pub masked: Option<MaskedValue>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Set a boolean attribute (serialized bare, e.g. `required`).
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.attrs.insert(name.into(), String::new());
    }

    /// Whether a boolean attribute is present.
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Remove an attribute; returns its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(name)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Remove a class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Append a child node.
    pub fn append(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Append a child element.
    pub fn append_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Insert a child element before all existing children.
    pub fn prepend_element(&mut self, element: Element) {
        self.children.insert(0, Node::Element(element));
    }

    /// Append escaped text content.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Replace all children with a single node.
    pub fn replace_children(&mut self, node: Node) {
        self.children = vec![node];
    }

    /// Whether this element is an interactive control.
    pub fn is_control(&self) -> bool {
        CONTROL_TAGS.contains(&self.tag.as_str())
    }

    /// First `input`, `textarea`, or `select` in depth-first order,
    /// including this element itself.
    pub fn first_control(&self) -> Option<&Element> {
        if self.is_control() {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(element) => element.first_control(),
            _ => None,
        })
    }

    /// Mutable variant of [`Element::first_control`].
    pub fn first_control_mut(&mut self) -> Option<&mut Element> {
        if self.is_control() {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.first_control_mut(),
            _ => None,
        })
    }

    /// Iterate over direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Mutable variant of [`Element::child_elements`].
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Collect every control element in the subtree, depth-first.
    pub fn controls(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_controls(&mut found);
        found
    }

    fn collect_controls<'a>(&'a self, found: &mut Vec<&'a Element>) {
        if self.is_control() {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_controls(found);
        }
    }

    /// Serialize the subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, 0);
        out
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape_html(value));
            }
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push_str(">\n");
            return;
        }
        if self.children.is_empty() {
            let _ = writeln!(out, "></{}>", self.tag);
            return;
        }
        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out, depth + 1),
                Node::Text(text) => {
                    let _ = writeln!(out, "{indent}  {}", escape_html(text));
                }
                Node::Markup(markup) => {
                    let _ = writeln!(out, "{indent}  {markup}");
                }
            }
        }
        let _ = writeln!(out, "{indent}</{}>", self.tag);
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_input() -> Element {
        let mut wrapper = Element::new("div");
        wrapper.add_class("field-wrapper");
        let mut label = Element::new("label");
        label.append_text("Name");
        wrapper.append_element(label);
        let mut input = Element::new("input");
        input.set_attr("type", "text");
        wrapper.append_element(input);
        wrapper
    }

    #[test]
    fn first_control_skips_non_controls() {
        let wrapper = labeled_input();
        let control = wrapper.first_control().unwrap();
        assert_eq!(control.tag(), "input");
    }

    #[test]
    fn first_control_is_depth_first() {
        let mut outer = Element::new("fieldset");
        let mut inner = Element::new("div");
        let mut select = Element::new("select");
        select.set_attr("id", "deep");
        inner.append_element(select);
        outer.append_element(inner);
        let mut late = Element::new("input");
        late.set_attr("id", "late");
        outer.append_element(late);

        assert_eq!(outer.first_control().unwrap().attr("id"), Some("deep"));
    }

    #[test]
    fn boolean_attributes_serialize_bare() {
        let mut input = Element::new("input");
        input.set_attr("type", "checkbox");
        input.set_flag("required");
        let html = input.to_html();
        assert!(html.contains("<input required type=\"checkbox\">"));
    }

    #[test]
    fn text_is_escaped_and_markup_is_not() {
        let mut p = Element::new("p");
        p.append_text("<script>alert(1)</script>");
        assert!(p.to_html().contains("&lt;script&gt;"));

        let mut div = Element::new("div");
        div.append(Node::Markup("<em>hi</em>".into()));
        assert!(div.to_html().contains("<em>hi</em>"));
    }

    #[test]
    fn identical_trees_serialize_identically() {
        assert_eq!(labeled_input().to_html(), labeled_input().to_html());
    }
}
