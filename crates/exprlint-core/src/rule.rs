//! Rule trait and catalogue metadata.

use crate::config::LintOptions;
use crate::context::ExprContext;
use crate::types::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};

/// Category a rule belongs to, for grouping in settings UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Findings that likely break the expression at evaluation time.
    Correctness,
    /// Stylistic and readability findings.
    Style,
    /// Findings about overly complex expressions.
    Complexity,
    /// Findings about expensive constructs.
    Performance,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correctness => write!(f, "correctness"),
            Self::Style => write!(f, "style"),
            Self::Complexity => write!(f, "complexity"),
            Self::Performance => write!(f, "performance"),
        }
    }
}

/// A single, independently toggleable static-analysis check.
///
/// Rules consume the token stream plus the raw lines and produce zero or
/// more diagnostics. They are independent: no rule depends on another's
/// output, and the engine runs them in fixed registration order.
pub trait Rule: Send + Sync {
    /// Stable kebab-case id, also the key in [`LintOptions::rules`].
    fn id(&self) -> &'static str;

    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Severity of diagnostics produced by this rule.
    fn default_severity(&self) -> Severity;

    /// Category for settings UIs.
    fn category(&self) -> RuleCategory;

    /// Checks the expression and returns any findings.
    fn check(&self, ctx: &ExprContext<'_>, options: &LintOptions) -> Vec<Diagnostic>;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Catalogue entry describing one rule, for settings UIs.
///
/// `enabled` reflects the caller-supplied options map at the time the
/// catalogue was built; toggling it mutates only the caller's map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Stable kebab-case id.
    pub id: String,
    /// Short human-readable name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Severity of diagnostics produced by the rule.
    pub severity: Severity,
    /// Whether the rule is enabled under the given options.
    pub enabled: bool,
    /// Category for grouping.
    pub category: RuleCategory,
}

impl RuleInfo {
    /// Builds the catalogue entry for `rule` under `options`.
    #[must_use]
    pub fn for_rule(rule: &dyn Rule, options: &LintOptions) -> Self {
        Self {
            id: rule.id().to_string(),
            name: rule.name().to_string(),
            description: rule.description().to_string(),
            severity: rule.default_severity(),
            enabled: options.is_rule_enabled(rule.id()),
            category: rule.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    struct StubRule;

    impl Rule for StubRule {
        fn id(&self) -> &'static str {
            "stub-rule"
        }
        fn name(&self) -> &'static str {
            "Stub rule"
        }
        fn description(&self) -> &'static str {
            "Always clean"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn category(&self) -> RuleCategory {
            RuleCategory::Style
        }
        fn check(&self, _ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
            Vec::new()
        }
    }

    #[test]
    fn rule_info_reflects_options_map() {
        let rule = StubRule;
        let mut options = LintOptions::default();

        let info = RuleInfo::for_rule(&rule, &options);
        assert!(info.enabled);
        assert_eq!(info.id, "stub-rule");
        assert_eq!(info.severity, Severity::Warning);
        assert_eq!(info.category, RuleCategory::Style);

        options.rules.insert("stub-rule".to_string(), false);
        let info = RuleInfo::for_rule(&rule, &options);
        assert!(!info.enabled);
    }

    #[test]
    fn stub_rule_runs_clean() {
        let tokens = tokenize("x");
        let ctx = ExprContext::new("x", &tokens);
        assert!(StubRule.check(&ctx, &LintOptions::default()).is_empty());
    }
}
