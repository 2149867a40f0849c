//! Defensive markup sanitization for rich-text field values.

use std::sync::OnceLock;

use regex::Regex;

/// Formatting tags allowed to survive sanitization.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "br", "em", "i", "li", "ol", "p", "span", "strong", "u", "ul",
];

fn script_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap())
}

fn tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9-]*)([^>]*)>").unwrap())
}

fn href() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)href\s*=\s*"([^"]*)""#).unwrap())
}

/// Strip markup down to harmless formatting.
///
/// Script and style blocks disappear with their content. Allowed
/// formatting tags survive stripped of every attribute except a safe
/// `href` on anchors; everything else is removed, keeping its text.
pub fn strip_tags(markup: &str) -> String {
    let without_scripts = script_blocks().replace_all(markup, "");
    tags()
        .replace_all(&without_scripts, |caps: &regex::Captures<'_>| {
            let closing = &caps[1];
            let tag = caps[2].to_ascii_lowercase();
            if !ALLOWED_TAGS.contains(&tag.as_str()) {
                return String::new();
            }
            if !closing.is_empty() {
                return format!("</{tag}>");
            }
            if tag == "a"
                && let Some(link) = href().captures(&caps[3])
                && is_safe_href(&link[1])
            {
                return format!("<a href=\"{}\">", &link[1]);
            }
            format!("<{tag}>")
        })
        .into_owned()
}

fn is_safe_href(href: &str) -> bool {
    let scheme = href.trim().to_ascii_lowercase();
    !(scheme.starts_with("javascript:") || scheme.starts_with("data:"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_blocks_vanish_entirely() {
        let out = strip_tags("before<script>alert('x')</script>after");
        assert_eq!(out, "beforeafter");
    }

    #[test]
    fn formatting_survives_without_attributes() {
        let out = strip_tags(r#"<p style="color:red" onclick="evil()">hi <b>there</b></p>"#);
        assert_eq!(out, "<p>hi <b>there</b></p>");
    }

    #[test]
    fn unknown_tags_are_removed_but_text_stays() {
        let out = strip_tags("<marquee>wow</marquee>");
        assert_eq!(out, "wow");
    }

    #[test]
    fn javascript_hrefs_are_dropped() {
        let out = strip_tags(r#"<a href="javascript:alert(1)">x</a>"#);
        assert_eq!(out, "<a>x</a>");
        let out = strip_tags(r#"<a href="/help">x</a>"#);
        assert_eq!(out, r#"<a href="/help">x</a>"#);
    }

    #[test]
    fn event_handlers_never_survive() {
        let out = strip_tags(r#"<b onmouseover="evil()">bold</b>"#);
        assert_eq!(out, "<b>bold</b>");
    }
}
