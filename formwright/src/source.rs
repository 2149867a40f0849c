//! Form-definition input: fetched `.json` resources and inline JSON text.

use std::sync::OnceLock;

use formwright_types::FormDefinition;
use regex::Regex;

/// Error loading or parsing a form definition.
///
/// These are the only fatal errors in the pipeline: a definition that
/// cannot be parsed produces no form at all, while everything downstream
/// degrades per subtree.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to fetch form definition from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("form definition request for {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("form definition is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch a form definition from a `.json` resource.
pub async fn fetch_definition(
    client: &reqwest::Client,
    url: &str,
) -> Result<FormDefinition, SourceError> {
    let fetch_err = |source| SourceError::Fetch {
        url: url.to_string(),
        source,
    };
    let response = client.get(url).send().await.map_err(fetch_err)?;
    if !response.status().is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    let body = response.text().await.map_err(fetch_err)?;
    Ok(serde_json::from_str(&body)?)
}

/// Parse an inline form definition.
///
/// Authoring tools smuggle a stray control byte and pretty-printing
/// whitespace into inline blocks; both are stripped before parsing.
pub fn parse_inline(text: &str) -> Result<FormDefinition, SourceError> {
    static CLEANUP: OnceLock<Regex> = OnceLock::new();
    let cleanup = CLEANUP.get_or_init(|| Regex::new(r"\x83\n|\n|\s\s+").unwrap());
    let cleaned = cleanup.replace_all(text, "");
    Ok(serde_json::from_str(&cleaned)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_json_is_cleaned_before_parsing() {
        let text = "{\n  \"action\": \"/submit\",\n  \"items\": [\n    {\"id\": \"a\", \"name\": \"a\"}\n  ]\n}";
        let definition = parse_inline(text).unwrap();
        assert_eq!(definition.action.as_deref(), Some("/submit"));
        assert_eq!(definition.root.items.len(), 1);
    }

    #[test]
    fn invalid_inline_json_is_fatal() {
        let err = parse_inline("{not json").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
