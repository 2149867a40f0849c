use std::time::Duration;

/// Options for a form render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Origin fragment references are resolved against.
    pub origin: String,

    /// Delay before the rule engine is invoked after assembly.
    pub rule_delay: Duration,

    /// Submission action override; the definition's own `action` wins
    /// when this is unset.
    pub action: Option<String>,
}

impl RenderOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            origin: "http://localhost:3000".to_string(),
            rule_delay: Duration::ZERO,
            action: None,
        }
    }

    /// Set the origin fragments are fetched from.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the rule-engine start delay.
    pub fn with_rule_delay(mut self, delay: Duration) -> Self {
        self.rule_delay = delay;
        self
    }

    /// Override the submission action path.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_chaining() {
        let options = RenderOptions::new()
            .with_origin("https://forms.example")
            .with_rule_delay(Duration::from_millis(50))
            .with_action("/submit");
        assert_eq!(options.origin, "https://forms.example");
        assert_eq!(options.rule_delay, Duration::from_millis(50));
        assert_eq!(options.action.as_deref(), Some("/submit"));
    }
}
