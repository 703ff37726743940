//! Token model for the expression dialect.

use serde::{Deserialize, Serialize};

/// Classification of a single token.
///
/// The wire names (`ae-function`, `ae-property`, ...) match what the editor
/// integration expects, so serialization uses explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Control-flow or declaration keyword (`if`, `var`, `function`, ...).
    #[serde(rename = "keyword")]
    Keyword,
    /// Plain identifier, including host globals such as `time`.
    #[serde(rename = "identifier")]
    Identifier,
    /// Host global function from the fixed allow-list (`wiggle`, `linear`, ...).
    #[serde(rename = "ae-function")]
    HostFunction,
    /// Host layer property from the fixed allow-list (`rotation`, `opacity`, ...).
    #[serde(rename = "ae-property")]
    HostProperty,
    /// Quoted string literal, escapes preserved verbatim.
    #[serde(rename = "string")]
    String,
    /// Numeric literal (digits and `.` only; no exponents, no sign).
    #[serde(rename = "number")]
    Number,
    /// Single or multi-character operator (`=`, `==`, `&&`, `++`, ...).
    #[serde(rename = "operator")]
    Operator,
    /// Brackets, separators, and any character the scanner does not recognize.
    #[serde(rename = "punctuation")]
    Punctuation,
    /// Line comment from `//` to end of line.
    #[serde(rename = "comment")]
    Comment,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::HostFunction => "ae-function",
            Self::HostProperty => "ae-property",
            Self::String => "string",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Comment => "comment",
        };
        write!(f, "{name}")
    }
}

/// A single token with its 1-based source position.
///
/// `column` marks the token's first character; tokens are produced in
/// non-decreasing `(line, column)` order and never extend past the end of
/// their source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Raw token text.
    pub value: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// Length of the token in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns `true` if the token text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Exclusive 1-based column just past the token's last character.
    #[must_use]
    pub fn end_column(&self) -> usize {
        self.column + self.len()
    }

    /// Returns `true` for identifier-family tokens (identifier, host
    /// function, host property).
    #[must_use]
    pub fn is_identifier_like(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Identifier | TokenKind::HostFunction | TokenKind::HostProperty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_column_is_column_plus_length() {
        let token = Token::new(TokenKind::Identifier, "offset", 3, 5);
        assert_eq!(token.len(), 6);
        assert_eq!(token.end_column(), 11);
    }

    #[test]
    fn kind_serializes_to_wire_names() {
        let json = serde_json::to_string(&TokenKind::HostFunction).unwrap();
        assert_eq!(json, "\"ae-function\"");
        let json = serde_json::to_string(&TokenKind::HostProperty).unwrap();
        assert_eq!(json, "\"ae-property\"");
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(TokenKind::Keyword.to_string(), "keyword");
        assert_eq!(TokenKind::HostFunction.to_string(), "ae-function");
    }
}
