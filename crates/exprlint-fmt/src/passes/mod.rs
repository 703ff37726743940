//! The formatter's ordered text passes.
//!
//! Every pass rewrites raw text, not tokens; patterns inside string
//! literals or comments can therefore be rewritten too. That is a retained,
//! documented limitation of the pass-based contract.

mod layout;
mod spacing;
mod terminators;
mod wrap;

pub(crate) use layout::{normalize_line_endings, reindent, trim_trailing_whitespace};
pub(crate) use spacing::{bracket_spacing, space_commas, space_operators, tighten_call_parens};
pub(crate) use terminators::{insert_semicolons, normalize_quotes};
pub(crate) use wrap::wrap_lines;

use crate::engine::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns shared by the passes.
pub(crate) struct Patterns {
    /// `{` followed by a non-space, non-`}` character.
    pub open_brace: Regex,
    /// Non-space, non-`{` character followed by `}`.
    pub close_brace: Regex,
    /// `[` followed by a non-space, non-`]` character.
    pub open_bracket: Regex,
    /// Non-space, non-`[` character followed by `]`.
    pub close_bracket: Regex,
    /// Word followed by whitespace and an opening parenthesis.
    pub call_paren: Regex,
    /// Word followed by an opening parenthesis, whitespace or not.
    pub call_paren_any: Regex,
    /// Binary operators, longest alternatives first.
    pub operators: Regex,
    /// Two or more consecutive spaces.
    pub space_runs: Regex,
    /// Whitespace before `++`/`--`.
    pub before_incdec: Regex,
    /// Whitespace after `++`/`--`.
    pub after_incdec: Regex,
    /// `!` followed by whitespace (never matches `!=`, which has none).
    pub bang_space: Regex,
    /// Comma with surrounding whitespace.
    pub comma: Regex,
    /// `var`/`let`/`const` as a whole word.
    pub declaration: Regex,
    /// Double-quoted literal without inner double quotes.
    pub double_quoted: Regex,
    /// Single-quoted literal without inner single quotes.
    pub single_quoted: Regex,
    /// Line that is exactly a control-keyword header: `if (...)` etc.
    pub control_header: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            open_brace: Regex::new(r"\{([^\s}])")?,
            close_brace: Regex::new(r"([^\s{])\}")?,
            open_bracket: Regex::new(r"\[([^\s\]])")?,
            close_bracket: Regex::new(r"([^\s\[])\]")?,
            call_paren: Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s+\(")?,
            call_paren_any: Regex::new(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*\(")?,
            operators: Regex::new(
                r"\s*(\+\+|--|==|!=|<=|>=|&&|\|\||\+=|-=|\*=|/=|=|\+|-|\*|/|%|<|>)\s*",
            )?,
            space_runs: Regex::new(r" {2,}")?,
            before_incdec: Regex::new(r"\s+(\+\+|--)")?,
            after_incdec: Regex::new(r"(\+\+|--)\s+")?,
            bang_space: Regex::new(r"!\s+")?,
            comma: Regex::new(r"\s*,\s*")?,
            declaration: Regex::new(r"\b(var|let|const)\b")?,
            double_quoted: Regex::new(r#""([^"]*)""#)?,
            single_quoted: Regex::new(r"'([^']*)'")?,
            control_header: Regex::new(r"^(?:if|for|while)\s*\(.*\)$")?,
        })
    }
}

static PATTERNS: Lazy<Result<Patterns, regex::Error>> = Lazy::new(Patterns::compile);

/// Returns the shared compiled patterns, surfacing a compile failure as a
/// pass error so the engine's fail-safe can kick in.
pub(crate) fn patterns() -> Result<&'static Patterns, FormatError> {
    PATTERNS
        .as_ref()
        .map_err(|e| FormatError::Pattern(e.clone()))
}

/// Splits a line into its leading whitespace and the rest.
pub(crate) fn split_indent(line: &str) -> (&str, &str) {
    let boundary = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(i, _)| i);
    line.split_at(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile() {
        assert!(patterns().is_ok());
    }

    #[test]
    fn split_indent_separates_prefix() {
        assert_eq!(split_indent("  x = 1"), ("  ", "x = 1"));
        assert_eq!(split_indent("x"), ("", "x"));
        assert_eq!(split_indent("   "), ("   ", ""));
    }
}
