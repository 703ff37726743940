//! Rule to enforce camelCase identifier names.
//!
//! An identifier token is reported when it does not match
//! `^[a-z][a-zA-Z0-9]*$`. Host built-ins such as `thisComp` are exempt;
//! host function and property names are separate token kinds and never
//! reach this rule.

use exprlint_core::builtins::is_host_global;
use exprlint_core::utils::{is_camel_case, to_camel_case};
use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for consistent-naming.
pub const ID: &str = "consistent-naming";

/// Rule name for consistent-naming.
pub const NAME: &str = "Consistent naming";

/// Flags identifiers that are not camelCase.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistentNaming;

impl ConsistentNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ConsistentNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags identifiers that do not follow camelCase naming"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for token in ctx.tokens {
            if token.kind != TokenKind::Identifier {
                continue;
            }
            if is_host_global(&token.value) || is_camel_case(&token.value) {
                continue;
            }

            let fixed = to_camel_case(&token.value);
            let suggestions = if fixed.is_empty() || fixed == token.value {
                Vec::new()
            } else {
                vec![fixed]
            };

            diagnostics.push(
                Diagnostic::new(
                    ID,
                    Severity::Info,
                    token.line,
                    token.column,
                    token.len(),
                    format!("`{}` does not follow camelCase naming", token.value),
                    ctx.line_text(token.line),
                )
                .with_suggestions(suggestions),
            );
        }

        diagnostics
    }
}
