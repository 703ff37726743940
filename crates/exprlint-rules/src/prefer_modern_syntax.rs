//! Rule to nudge `var` declarations and `function(` literals toward
//! modern syntax.
//!
//! # Detected patterns
//!
//! - A `var` keyword; quick fixes offer `let` and `const`.
//! - A `function` keyword immediately followed by `(`; the message points
//!   at arrow syntax.

use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for prefer-modern-syntax.
pub const ID: &str = "prefer-modern-syntax";

/// Rule name for prefer-modern-syntax.
pub const NAME: &str = "Prefer modern syntax";

/// Suggests `let`/`const` and arrow functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferModernSyntax;

impl PreferModernSyntax {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PreferModernSyntax {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Suggests let/const over var and arrow syntax over anonymous functions"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (idx, token) in ctx.tokens.iter().enumerate() {
            if token.kind != TokenKind::Keyword {
                continue;
            }

            if token.value == "var" {
                diagnostics.push(
                    Diagnostic::new(
                        ID,
                        Severity::Info,
                        token.line,
                        token.column,
                        token.len(),
                        "Prefer `let` or `const` over `var`",
                        ctx.line_text(token.line),
                    )
                    .with_suggestions(vec!["let".to_string(), "const".to_string()]),
                );
            }

            if token.value == "function"
                && ctx
                    .tokens
                    .get(idx + 1)
                    .is_some_and(|next| next.value == "(")
            {
                diagnostics.push(Diagnostic::new(
                    ID,
                    Severity::Info,
                    token.line,
                    token.column,
                    token.len(),
                    "Prefer arrow syntax over an anonymous `function`",
                    ctx.line_text(token.line),
                ));
            }
        }

        diagnostics
    }
}
