//! Rule to suggest `const` for `var` declarations that are never
//! reassigned.
//!
//! Reassignment is a token-pair pattern: an identifier token with the
//! declared name immediately followed by a plain `=` operator. The
//! declaration itself is one such pair, so "at most one" assignment means
//! the variable was initialized and never written again. Compound
//! assignments (`+=` and friends) are distinct operator tokens and do not
//! count, a known limit of the pair heuristic.

use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for prefer-const.
pub const ID: &str = "prefer-const";

/// Rule name for prefer-const.
pub const NAME: &str = "Prefer const";

/// Suggests `const` for never-reassigned `var` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferConst;

impl PreferConst {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PreferConst {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Suggests const for var declarations that are never reassigned"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for declaration in ctx.declarations() {
            if declaration.keyword != "var" {
                continue;
            }
            if assignment_count(ctx, &declaration.name) > 1 {
                continue;
            }

            let Some(keyword) = ctx.tokens.get(declaration.keyword_index) else {
                continue;
            };
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Info,
                    keyword.line,
                    keyword.column,
                    keyword.len(),
                    format!("`{}` is never reassigned; use `const`", declaration.name),
                    ctx.line_text(keyword.line),
                )
                .with_suggestions(vec!["const".to_string()]),
            );
        }

        diagnostics
    }
}

/// Counts `name =` token pairs across the whole stream.
fn assignment_count(ctx: &ExprContext<'_>, name: &str) -> usize {
    ctx.tokens
        .windows(2)
        .filter(|pair| {
            pair[0].kind == TokenKind::Identifier
                && pair[0].value == name
                && pair[1].kind == TokenKind::Operator
                && pair[1].value == "="
        })
        .count()
}
