//! Rule to flag calls to deprecated host functions.
//!
//! The deprecated-name -> replacement map is fixed engine data; the single
//! suggestion on each finding is the replacement, ready for quick-fix
//! span replacement. Setting `LintOptions::allow_deprecated` skips the rule
//! entirely.

use exprlint_core::builtins::deprecated_replacement;
use exprlint_core::{Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity};

/// Rule id for no-deprecated-functions.
pub const ID: &str = "no-deprecated-functions";

/// Rule name for no-deprecated-functions.
pub const NAME: &str = "No deprecated functions";

/// Flags identifiers present in the deprecated-function map.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeprecatedFunctions;

impl NoDeprecatedFunctions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDeprecatedFunctions {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags deprecated host functions and suggests their replacements"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn check(&self, ctx: &ExprContext<'_>, options: &LintOptions) -> Vec<Diagnostic> {
        if options.allow_deprecated {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for token in ctx.tokens {
            if !token.is_identifier_like() {
                continue;
            }
            let Some(replacement) = deprecated_replacement(&token.value) else {
                continue;
            };

            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Warning,
                    token.line,
                    token.column,
                    token.len(),
                    format!("`{}` is deprecated; use `{replacement}`", token.value),
                    ctx.line_text(token.line),
                )
                .with_suggestions(vec![replacement.to_string()]),
            );
        }
        diagnostics
    }
}
