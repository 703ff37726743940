//! Diagnostic types produced by the lint engine.

use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational finding; a stylistic nudge.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that will likely break the expression at evaluation time.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single lint finding.
///
/// Immutable once returned. Positions are 1-based; `end_column` is
/// exclusive (`column + token length`). `suggestions` feeds the quick-fix
/// UI: applying a suggestion replaces the `[column, end_column)` span on
/// `line` with the suggestion text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// 1-based start line.
    pub line: usize,
    /// 1-based start column.
    pub column: usize,
    /// 1-based end line (equals `line` except for whole-source findings).
    pub end_line: usize,
    /// Exclusive 1-based end column.
    pub end_column: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of the finding.
    pub severity: Severity,
    /// Id of the rule that produced this finding.
    pub rule_id: String,
    /// Text of the offending line.
    pub source: String,
    /// Quick-fix replacement candidates, most likely first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic covering `len` characters on a single line.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        line: usize,
        column: usize,
        len: usize,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            end_line: line,
            end_column: column + len,
            message: message.into(),
            severity,
            rule_id: rule_id.into(),
            source: source.into(),
            suggestions: Vec::new(),
        }
    }

    /// Creates a diagnostic spanning an explicit multi-line range.
    #[must_use]
    pub fn spanning(
        rule_id: impl Into<String>,
        severity: Severity,
        line: usize,
        column: usize,
        end_line: usize,
        end_column: usize,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
            message: message.into(),
            severity,
            rule_id: rule_id.into(),
            source: source.into(),
            suggestions: Vec::new(),
        }
    }

    /// Attaches quick-fix suggestions.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.line, self.column, self.severity, self.rule_id, self.message
        )
    }
}

/// miette adapter for rich terminal rendering of a [`Diagnostic`].
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[help]
    help: Option<String>,
    #[source_code]
    source_code: String,
    #[label("{rule_id}")]
    span: SourceSpan,
    rule_id: String,
}

impl DiagnosticReport {
    /// Builds a report for `diagnostic`, resolving its line/column position
    /// to a byte span inside `source`.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, source: &str) -> Self {
        let offset = byte_offset(source, diagnostic.line, diagnostic.column);
        let end = byte_offset(source, diagnostic.end_line, diagnostic.end_column);
        let length = end.saturating_sub(offset).max(1);

        Self {
            message: format!("[{}] {}", diagnostic.rule_id, diagnostic.message),
            help: diagnostic
                .suggestions
                .first()
                .map(|s| format!("try `{s}`")),
            source_code: source.to_string(),
            span: SourceSpan::from((offset, length)),
            rule_id: diagnostic.rule_id.clone(),
        }
    }
}

/// Converts a 1-based line/column pair to a byte offset, clamped to the end
/// of the source. Line-terminator widths come from the source itself, so
/// `\r\n` endings do not skew offsets on later lines.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let content = text.trim_end_matches(['\n', '\r']);
            let within: usize = content
                .chars()
                .take(column.saturating_sub(1))
                .map(char::len_utf8)
                .sum();
            return (offset + within).min(source.len());
        }
        offset += text.len();
    }
    source.len()
}
