//! # exprlint
//!
//! Lint and format engine for the constrained JavaScript-like expression
//! dialect driven by host applications (motion-graphics style `wiggle`,
//! `thisComp`, `time` scripting).
//!
//! This is the facade crate: it re-exports the tokenizer, diagnostics,
//! and rule machinery from `exprlint-core`, the ten built-in rules from
//! `exprlint-rules`, and the formatter from `exprlint-fmt`, plus two
//! one-call entry points for the common case.
//!
//! ## Quick start
//!
//! ```
//! use exprlint::{lint, LintOptions};
//!
//! let diagnostics = lint("random(0, 1)", &LintOptions::default());
//! assert_eq!(diagnostics[0].rule_id, "no-deprecated-functions");
//! ```
//!
//! ```
//! use exprlint::{format, FormatOptions};
//!
//! assert_eq!(format("a=b+1", &FormatOptions::default()), "a = b + 1;\n");
//! ```
//!
//! Every call is a pure function of `(source, options)`: no I/O, no
//! global mutable state, safe to run per keystroke from any thread.

#![forbid(unsafe_code)]

pub use exprlint_core::*;

pub use exprlint_fmt::{
    format, format_range, try_format, FormatError, FormatOptions, FormatRange, IndentStyle,
    QuoteStyle,
};

/// Built-in rules and the default catalogue.
pub mod rules {
    pub use exprlint_rules::*;
}

use once_cell::sync::Lazy;

static LINTER: Lazy<Linter> = Lazy::new(|| {
    Linter::builder()
        .rules(exprlint_rules::default_rules())
        .build()
});

/// Lints `source` with the full built-in rule set.
///
/// Rules disabled in `options` are skipped; a rule failing internally is
/// skipped without affecting the others.
#[must_use]
pub fn lint(source: &str, options: &LintOptions) -> Vec<Diagnostic> {
    LINTER.lint(source, options)
}

/// Returns metadata for every built-in rule, with `enabled` reflecting
/// `options`. Intended for settings UIs; toggling a rule only ever
/// mutates the caller's options map.
#[must_use]
pub fn catalogue(options: &LintOptions) -> Vec<RuleInfo> {
    LINTER.catalogue(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_lint_runs_the_full_rule_set() {
        let diagnostics = lint("var x = 5;", &LintOptions::default());
        assert!(diagnostics.iter().any(|d| d.rule_id == "prefer-const"));
    }

    #[test]
    fn facade_catalogue_lists_ten_rules() {
        assert_eq!(catalogue(&LintOptions::default()).len(), 10);
    }
}
