//! Lint engine: runs registered rules over a tokenized expression.

use crate::config::LintOptions;
use crate::context::ExprContext;
use crate::lexer::tokenize;
use crate::rule::{Rule, RuleBox, RuleInfo};
use crate::types::Diagnostic;

use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
}

impl LinterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule. Rules run in registration order.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules, preserving their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter { rules: self.rules }
    }
}

/// The lint engine.
///
/// A pure, synchronous transform: `lint()` is a function of its inputs with
/// no shared mutable state, safe to call concurrently from multiple sites.
/// Diagnostics come back in fixed rule-registration order, not position
/// order; callers needing position order must sort explicitly.
pub struct Linter {
    rules: Vec<RuleBox>,
}

impl Linter {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints `source` under `options`.
    ///
    /// Disabled rules are skipped. A rule that panics is logged and skipped
    /// without aborting the remaining rules; malformed or partial input
    /// degrades to best-effort diagnostics rather than failing the call.
    #[must_use]
    pub fn lint(&self, source: &str, options: &LintOptions) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let ctx = ExprContext::new(source, &tokens);
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            if !options.is_rule_enabled(rule.id()) {
                debug!(rule = rule.id(), "rule disabled, skipping");
                continue;
            }

            match catch_unwind(AssertUnwindSafe(|| rule.check(&ctx, options))) {
                Ok(found) => diagnostics.extend(found),
                Err(_) => warn!(rule = rule.id(), "rule panicked, skipping"),
            }
        }

        diagnostics
    }

    /// Catalogue of registered rules under `options`, in registration order.
    #[must_use]
    pub fn catalogue(&self, options: &LintOptions) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo::for_rule(rule.as_ref(), options))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleCategory;
    use crate::types::Severity;

    struct AlwaysFires(&'static str);

    impl Rule for AlwaysFires {
        fn id(&self) -> &'static str {
            self.0
        }
        fn name(&self) -> &'static str {
            "Always fires"
        }
        fn default_severity(&self) -> Severity {
            Severity::Info
        }
        fn category(&self) -> RuleCategory {
            RuleCategory::Style
        }
        fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
            vec![Diagnostic::new(
                self.0,
                Severity::Info,
                1,
                1,
                1,
                "fired",
                ctx.line_text(1),
            )]
        }
    }

    struct Panics;

    impl Rule for Panics {
        fn id(&self) -> &'static str {
            "panics"
        }
        fn name(&self) -> &'static str {
            "Panics"
        }
        fn default_severity(&self) -> Severity {
            Severity::Error
        }
        fn category(&self) -> RuleCategory {
            RuleCategory::Correctness
        }
        fn check(&self, _ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
            panic!("boom");
        }
    }

    #[test]
    fn runs_rules_in_registration_order() {
        let linter = Linter::builder()
            .rule(AlwaysFires("second"))
            .rule(AlwaysFires("first"))
            .build();

        let diagnostics = linter.lint("x", &LintOptions::default());
        let ids: Vec<&str> = diagnostics.iter().map(|d| d.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let linter = Linter::builder().rule(AlwaysFires("toggled")).build();
        let options = LintOptions::new().with_rule("toggled", false);
        assert!(linter.lint("x", &options).is_empty());
    }

    #[test]
    fn panicking_rule_does_not_abort_the_run() {
        let linter = Linter::builder()
            .rule(Panics)
            .rule(AlwaysFires("survivor"))
            .build();

        let diagnostics = linter.lint("x", &LintOptions::default());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, "survivor");
    }

    #[test]
    fn catalogue_lists_registered_rules() {
        let linter = Linter::builder().rule(AlwaysFires("listed")).build();
        let catalogue = linter.catalogue(&LintOptions::default());
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue[0].id, "listed");
        assert!(catalogue[0].enabled);
    }
}
