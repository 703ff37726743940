//! Rule to flag identifiers that are neither declared nor host-provided.
//!
//! # Detected patterns
//!
//! An identifier token that is not a declared variable (`var`/`let`/`const`
//! followed by an identifier on the same line), not a host global
//! (`time`, `value`, `index`, `thisComp`, `thisLayer`, `thisProperty`), and
//! not on the host function allow-list.
//!
//! Up to three quick-fix suggestions are offered, picked from the declared
//! variables by substring containment or edit distance.

use exprlint_core::utils::levenshtein;
use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for no-undefined-variables.
pub const ID: &str = "no-undefined-variables";

/// Rule name for no-undefined-variables.
pub const NAME: &str = "No undefined variables";

/// Maximum number of quick-fix suggestions per finding.
const MAX_SUGGESTIONS: usize = 3;

/// Maximum edit distance for a declared name to qualify as a suggestion.
const MAX_EDIT_DISTANCE: usize = 2;

/// Flags identifiers with no visible declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUndefinedVariables;

impl NoUndefinedVariables {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoUndefinedVariables {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags identifiers that are neither declared nor provided by the host"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let declared = ctx.declared_names();
        let mut diagnostics = Vec::new();

        for token in ctx.tokens {
            if token.kind != TokenKind::Identifier {
                continue;
            }
            if ctx.is_known_identifier(&token.value, &declared) {
                continue;
            }

            let suggestions = suggest(&token.value, &declared);
            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Error,
                    token.line,
                    token.column,
                    token.len(),
                    format!("`{}` is not defined", token.value),
                    ctx.line_text(token.line),
                )
                .with_suggestions(suggestions),
            );
        }

        diagnostics
    }
}

/// Picks up to three candidates from the declared set, in declaration order.
fn suggest(unknown: &str, declared: &[String]) -> Vec<String> {
    declared
        .iter()
        .filter(|name| {
            name.contains(unknown)
                || unknown.contains(name.as_str())
                || levenshtein(unknown, name) <= MAX_EDIT_DISTANCE
        })
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
