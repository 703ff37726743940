//! Rule to flag expensive host calls inside loop bodies.
//!
//! Loop bodies are tracked over the token stream: a `for`/`while` keyword
//! arms a pending loop, its `{` records the brace depth the body opened
//! at, and only a `}` closing that recorded depth ends the body. Inner
//! blocks and object literals inside the body leave the tracking intact.
//! Any host function from the expensive subset (`wiggle`, `random`,
//! `noise`, `valueAtTime`) seen inside a loop header or body is reported.
//! A brace-less body stays armed until its statement-level `;`.

use exprlint_core::builtins::is_expensive_function;
use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for performance-warnings.
pub const ID: &str = "performance-warnings";

/// Rule name for performance-warnings.
pub const NAME: &str = "Performance warnings";

/// Flags expensive host functions called inside loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceWarnings;

impl PerformanceWarnings {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PerformanceWarnings {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags expensive host functions called inside loop bodies"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Performance
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut brace_depth = 0usize;
        let mut paren_depth = 0usize;
        // Brace depths at which a loop body opened.
        let mut loop_braces: Vec<usize> = Vec::new();
        let mut pending_loop = false;

        for token in ctx.tokens {
            match token.kind {
                TokenKind::Keyword if token.value == "for" || token.value == "while" => {
                    pending_loop = true;
                }
                TokenKind::Punctuation => match token.value.as_str() {
                    "(" => paren_depth += 1,
                    ")" => paren_depth = paren_depth.saturating_sub(1),
                    "{" => {
                        brace_depth += 1;
                        if pending_loop {
                            loop_braces.push(brace_depth);
                            pending_loop = false;
                        }
                    }
                    "}" => {
                        if loop_braces.last() == Some(&brace_depth) {
                            loop_braces.pop();
                        }
                        brace_depth = brace_depth.saturating_sub(1);
                    }
                    // Statement end outside parens closes a brace-less body;
                    // loop-header semicolons sit at paren depth 1.
                    ";" if paren_depth == 0 => pending_loop = false,
                    _ => {}
                },
                TokenKind::HostFunction
                    if (pending_loop || !loop_braces.is_empty())
                        && is_expensive_function(&token.value) =>
                {
                    diagnostics.push(Diagnostic::new(
                        ID,
                        Severity::Warning,
                        token.line,
                        token.column,
                        token.len(),
                        format!(
                            "`{}()` inside a loop re-evaluates every iteration; hoist it out",
                            token.value
                        ),
                        ctx.line_text(token.line),
                    ));
                }
                _ => {}
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exprlint_core::tokenize;

    fn check(source: &str) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let ctx = ExprContext::new(source, &tokens);
        PerformanceWarnings::new().check(&ctx, &LintOptions::default())
    }

    #[test]
    fn wiggle_in_a_loop_is_flagged() {
        let source = "for (i = 0; i < 5; i++) {\n  x = wiggle(5, 10);\n}";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, ID);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].line, 2);
    }

    #[test]
    fn wiggle_at_top_level_passes() {
        assert!(check("x = wiggle(5, 10);").is_empty());
    }

    #[test]
    fn cheap_functions_in_loops_pass() {
        let source = "while (i < 5) { x = linear(i, 0, 5, 0, 1); i++; }";
        assert!(check(source).is_empty());
    }

    #[test]
    fn call_after_the_closing_brace_passes() {
        let source = "while (i < 5) { i++; }\nx = valueAtTime(0);";
        assert!(check(source).is_empty());
    }

    #[test]
    fn inner_block_does_not_end_the_loop_body() {
        let source = "for (i = 0; i < 5; i++) {\n  if (x > 0) { y = 1; }\n  z = wiggle(5, 10);\n}";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }

    #[test]
    fn object_literal_does_not_end_the_loop_body() {
        let source = "while (i < 5) {\n  o = { a: 1 };\n  n = noise(i);\n  i++;\n}";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }

    #[test]
    fn braceless_body_ends_at_its_semicolon() {
        let source = "while (i < 5) x = wiggle(1);\ny = noise(2);";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
    }

    #[test]
    fn nested_loops_stay_tracked() {
        let source = "for (i = 0; i < 2; i++) {\n  while (j < 2) {\n    n = noise(j);\n  }\n}\nm = noise(1);";
        let diagnostics = check(source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }
}
