//! Rule to cap a cyclomatic-like complexity score.
//!
//! The score starts at 1 and adds one for every branching keyword
//! (`if`, `else`, `while`, `for`, `switch`, `case`, `catch`) and one for
//! every `&&`/`||` operator token. When the score exceeds
//! `LintOptions::max_complexity`, a single diagnostic spans the whole
//! source.

use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for max-complexity.
pub const ID: &str = "max-complexity";

/// Rule name for max-complexity.
pub const NAME: &str = "Max complexity";

const BRANCH_KEYWORDS: &[&str] = &["if", "else", "while", "for", "switch", "case", "catch"];

/// Flags expressions whose complexity score exceeds the configured ceiling.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxComplexity;

impl MaxComplexity {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the complexity score for the token stream.
    #[must_use]
    pub fn score(ctx: &ExprContext<'_>) -> usize {
        let mut score = 1;
        for token in ctx.tokens {
            match token.kind {
                TokenKind::Keyword if BRANCH_KEYWORDS.contains(&token.value.as_str()) => {
                    score += 1;
                }
                TokenKind::Operator if token.value == "&&" || token.value == "||" => {
                    score += 1;
                }
                _ => {}
            }
        }
        score
    }
}

impl Rule for MaxComplexity {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Caps the branching complexity of an expression"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Complexity
    }

    fn check(&self, ctx: &ExprContext<'_>, options: &LintOptions) -> Vec<Diagnostic> {
        let score = Self::score(ctx);
        if score <= options.max_complexity {
            return Vec::new();
        }
        tracing::debug!(score, max = options.max_complexity, "complexity ceiling exceeded");

        let end_line = ctx.lines.len().max(1);
        let end_column = ctx
            .lines
            .last()
            .map_or(1, |line| line.chars().count() + 1);

        vec![Diagnostic::spanning(
            ID,
            Severity::Warning,
            1,
            1,
            end_line,
            end_column,
            format!(
                "Expression complexity is {score}, above the maximum of {}",
                options.max_complexity
            ),
            ctx.line_text(1),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprlint_core::tokenize;

    fn check(source: &str, max: usize) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let ctx = ExprContext::new(source, &tokens);
        let options = LintOptions {
            max_complexity: max,
            ..LintOptions::default()
        };
        MaxComplexity::new().check(&ctx, &options)
    }

    #[test]
    fn simple_expression_scores_one() {
        let tokens = tokenize("value + 1");
        let ctx = ExprContext::new("value + 1", &tokens);
        assert_eq!(MaxComplexity::score(&ctx), 1);
    }

    #[test]
    fn logical_operators_and_branches_add_up() {
        let source = "if (a && b || c) { x = 1; } else { x = 2; }";
        let tokens = tokenize(source);
        let ctx = ExprContext::new(source, &tokens);
        // 1 + if + else + && + ||
        assert_eq!(MaxComplexity::score(&ctx), 5);
    }

    #[test]
    fn single_diagnostic_spans_the_whole_source() {
        let mut source = String::new();
        for i in 0..11 {
            source.push_str(&format!("if (a{i}) {{ x = {i}; }}\n"));
        }
        let diagnostics = check(&source, 10);
        assert_eq!(diagnostics.len(), 1);

        let d = &diagnostics[0];
        assert_eq!(d.rule_id, ID);
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!((d.line, d.column), (1, 1));
        assert_eq!(d.end_line, 11);
        assert!(d.message.contains("12"));
    }

    #[test]
    fn at_the_ceiling_is_clean() {
        let diagnostics = check("if (a) { x = 1; }", 2);
        assert!(diagnostics.is_empty());
    }
}
