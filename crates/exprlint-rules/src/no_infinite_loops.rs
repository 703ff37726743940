//! Rule to flag obvious infinite loops.
//!
//! Purely textual, not structural: for every `while`/`for` keyword token,
//! the raw text of its line is checked for `while(true)` or `while (true)`.
//! A loop made infinite any other way is not detected.

use exprlint_core::{
    Diagnostic, ExprContext, LintOptions, Rule, RuleCategory, Severity, TokenKind,
};

/// Rule id for no-infinite-loops.
pub const ID: &str = "no-infinite-loops";

/// Rule name for no-infinite-loops.
pub const NAME: &str = "No infinite loops";

/// Flags `while (true)` loops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInfiniteLoops;

impl NoInfiniteLoops {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoInfiniteLoops {
    fn id(&self) -> &'static str {
        ID
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags while(true) loops, which never terminate in an expression"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn check(&self, ctx: &ExprContext<'_>, _options: &LintOptions) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut reported_lines: Vec<usize> = Vec::new();
        for token in ctx.tokens {
            if token.kind != TokenKind::Keyword
                || (token.value != "while" && token.value != "for")
            {
                continue;
            }
            // The check is per line of text; several loop keywords on one
            // line would otherwise report the same finding repeatedly.
            if reported_lines.contains(&token.line) {
                continue;
            }

            let line = ctx.line_text(token.line);
            if line.contains("while(true)") || line.contains("while (true)") {
                diagnostics.push(Diagnostic::new(
                    ID,
                    Severity::Error,
                    token.line,
                    token.column,
                    token.len(),
                    "Loop condition is always true; the expression will never finish",
                    line,
                ));
                reported_lines.push(token.line);
            }
        }
        diagnostics
    }
}
