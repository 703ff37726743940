//! Rule to flag unexplained numeric literals.
//!
//! A number token is reported when it is not on the fixed allow-list
//! (common counts, percentages, and angle values) and its magnitude is
//! greater than 1. Fractional factors in `[0, 1]` read fine inline and are
//! left alone.

use exprlint_core::builtins::ALLOWED_NUMBERS;
use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for no-magic-numbers.
pub const ID: &str = "no-magic-numbers";

/// Rule name for no-magic-numbers.
pub const NAME: &str = "No magic numbers";

/// Flags numeric literals that deserve a named constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMagicNumbers;

impl NoMagicNumbers {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoMagicNumbers {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags numeric literals that should be extracted to a named constant"
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
            if token.kind != TokenKind::Number {
                continue;
            }
            // Degenerate literals like `1.2.3` fail to parse; skip them.
            let Ok(value) = token.value.parse::<f64>() else {
                continue;
            };
            if is_allowed(value) || value.abs() <= 1.0 {
                continue;
            }

            diagnostics.push(Diagnostic::new(
                ID,
                Severity::Info,
                token.line,
                token.column,
                token.len(),
                format!(
                    "Magic number {}; extract it into a named constant",
                    token.value
                ),
                ctx.line_text(token.line),
            ));
        }

        diagnostics
    }
}

fn is_allowed(value: f64) -> bool {
    ALLOWED_NUMBERS
        .iter()
        .any(|allowed| (allowed - value).abs() < f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprlint_core::tokenize;

    fn check(source: &str) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let ctx = ExprContext::new(source, &tokens);
        NoMagicNumbers::new().check(&ctx, &LintOptions::default())
    }

    #[test]
    fn flags_forty_five() {
        let diagnostics = check("rotation = time * 45;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, ID);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(diagnostics[0].column, 19);
        assert_eq!(diagnostics[0].end_column, 21);
    }

    #[test]
    fn allow_list_values_pass() {
        assert!(check("a = 0 + 1 + 2 + 10 + 100 + 360 + 180 + 90").is_empty());
    }

    #[test]
    fn small_magnitudes_pass() {
        assert!(check("opacity = value * 0.5;").is_empty());
    }

    #[test]
    fn minus_one_lexes_as_two_tokens_and_passes() {
        // `-` is a separate operator token, so the number token is `1`,
        // which the magnitude check already exempts. The `-1` allow-list
        // entry is unreachable in practice.
        assert!(check("x = -1;").is_empty());
    }

    #[test]
    fn fractional_magic_numbers_are_flagged() {
        let diagnostics = check("scale = value * 2.75;");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("2.75"));
    }
}
