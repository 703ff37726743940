//! Rule to flag declared variables that are never used.
//!
//! Usage is counted by scanning the whole token stream for identifier
//! tokens with the declared name. The declaration-site identifier is itself
//! such a token, so it counts as a use; a plain `var x = 5;` is therefore
//! never reported. That behavior is part of the engine's published
//! contract and is pinned by a regression test here and in the facade
//! crate's scenario tests.

use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for no-unused-variables.
pub const ID: &str = "no-unused-variables";

/// Rule name for no-unused-variables.
pub const NAME: &str = "No unused variables";

/// Flags declared variables with zero identifier-token occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUnusedVariables;

impl NoUnusedVariables {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoUnusedVariables {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags declared variables that never appear as an identifier"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for declaration in ctx.declarations() {
            let uses = ctx
                .tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Identifier && t.value == declaration.name)
                .count();
            if uses > 0 {
                continue;
            }

            let Some(ident) = ctx.tokens.get(declaration.ident_index) else {
                continue;
            };
            diagnostics.push(Diagnostic::new(
                ID,
                Severity::Warning,
                ident.line,
                ident.column,
                ident.len(),
                format!("`{}` is declared but never used", declaration.name),
                ctx.line_text(ident.line),
            ));
        }

        diagnostics
    }
}
