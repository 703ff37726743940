//! Lint options.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default complexity ceiling for the `max-complexity` rule.
pub const DEFAULT_MAX_COMPLEXITY: usize = 10;

/// Default line-length budget.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;

/// Caller-supplied lint configuration.
///
/// Immutable from the engine's point of view: toggling a rule mutates only
/// the caller-held map, never engine-internal state. Field names follow the
/// editor integration's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LintOptions {
    /// Per-rule enable map keyed by rule id; absent ids default to enabled.
    pub rules: HashMap<String, bool>,
    /// Ceiling for the cyclomatic-like complexity score.
    pub max_complexity: usize,
    /// Line-length budget, shared with the formatter's defaults.
    pub max_line_length: usize,
    /// When set, the deprecated-function rule is skipped entirely.
    pub allow_deprecated: bool,
    /// Reserved for stricter host-side validation; carried through unchanged.
    pub strict_mode: bool,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            max_complexity: DEFAULT_MAX_COMPLEXITY,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            allow_deprecated: false,
            strict_mode: false,
        }
    }
}

impl LintOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the rule with `id` is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, id: &str) -> bool {
        self.rules.get(id).copied().unwrap_or(true)
    }

    /// Enables or disables a rule, consuming and returning `self`.
    #[must_use]
    pub fn with_rule(mut self, id: impl Into<String>, enabled: bool) -> Self {
        self.rules.insert(id.into(), enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_default_to_enabled() {
        let options = LintOptions::default();
        assert!(options.is_rule_enabled("no-undefined-variables"));
        assert_eq!(options.max_complexity, 10);
        assert!(!options.allow_deprecated);
    }

    #[test]
    fn with_rule_toggles_only_that_rule() {
        let options = LintOptions::new().with_rule("no-magic-numbers", false);
        assert!(!options.is_rule_enabled("no-magic-numbers"));
        assert!(options.is_rule_enabled("prefer-const"));
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let options: LintOptions =
            serde_json::from_str(r#"{"maxComplexity": 4, "allowDeprecated": true}"#).unwrap();
        assert_eq!(options.max_complexity, 4);
        assert!(options.allow_deprecated);
        assert_eq!(options.max_line_length, 120);
    }
}
