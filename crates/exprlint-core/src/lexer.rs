//! Hand-rolled tokenizer for the expression dialect.
//!
//! A single left-to-right, line-by-line scan that never fails: unrecognized
//! characters degrade to one-character punctuation tokens, and an
//! unterminated string silently ends at the end of its line. Block comments
//! are not supported.

use crate::builtins;
use crate::token::{Token, TokenKind};

/// Multi-character operators, matched greedily before single characters.
const MULTI_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=",
];

/// Characters that form single-character operator tokens.
///
/// Unary minus is deliberately an operator token of its own; `-1` always
/// lexes as two tokens.
const SINGLE_CHAR_OPERATORS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!'];

/// Tokenizes `source` into an ordered token list.
///
/// Positions are 1-based; `column` marks the token's first character on its
/// line. Tokens come out in non-decreasing `(line, column)` order and never
/// reference a position past the end of their line.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (line_idx, line) in source.lines().enumerate() {
        scan_line(line, line_idx + 1, &mut tokens);
    }
    tokens
}

fn scan_line(line: &str, line_no: usize, tokens: &mut Vec<Token>) {
    let chars: Vec<char> = line.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];
        let column = pos + 1;

        if ch.is_whitespace() {
            pos += 1;
            continue;
        }

        // Line comment: consume the remainder of the line.
        if ch == '/' && chars.get(pos + 1) == Some(&'/') {
            let value: String = chars[pos..].iter().collect();
            tokens.push(Token::new(TokenKind::Comment, value, line_no, column));
            break;
        }

        if ch == '\'' || ch == '"' {
            pos = scan_string(&chars, pos, line_no, tokens);
            continue;
        }

        if ch.is_ascii_digit() {
            pos = scan_number(&chars, pos, line_no, tokens);
            continue;
        }

        if is_identifier_start(ch) {
            pos = scan_word(&chars, pos, line_no, tokens);
            continue;
        }

        if let Some(op) = match_multi_char_operator(&chars, pos) {
            tokens.push(Token::new(TokenKind::Operator, op, line_no, column));
            pos += 2;
            continue;
        }

        if SINGLE_CHAR_OPERATORS.contains(&ch) {
            tokens.push(Token::new(
                TokenKind::Operator,
                ch.to_string(),
                line_no,
                column,
            ));
            pos += 1;
            continue;
        }

        // Everything else, recognized or not, is punctuation.
        tokens.push(Token::new(
            TokenKind::Punctuation,
            ch.to_string(),
            line_no,
            column,
        ));
        pos += 1;
    }
}

/// Scans a quoted string starting at `start`. Backslash escapes the
/// following character; a missing closing quote ends the token at line end.
fn scan_string(chars: &[char], start: usize, line_no: usize, tokens: &mut Vec<Token>) -> usize {
    let quote = chars[start];
    let mut pos = start + 1;
    while pos < chars.len() {
        if chars[pos] == '\\' {
            pos += 2;
            continue;
        }
        if chars[pos] == quote {
            pos += 1;
            break;
        }
        pos += 1;
    }
    let end = pos.min(chars.len());
    let value: String = chars[start..end].iter().collect();
    tokens.push(Token::new(TokenKind::String, value, line_no, start + 1));
    end
}

/// Scans a numeric literal: digits and `.` only.
fn scan_number(chars: &[char], start: usize, line_no: usize, tokens: &mut Vec<Token>) -> usize {
    let mut pos = start;
    while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
        pos += 1;
    }
    let value: String = chars[start..pos].iter().collect();
    tokens.push(Token::new(TokenKind::Number, value, line_no, start + 1));
    pos
}

/// Scans an identifier-family token and classifies it by fixed lookup.
fn scan_word(chars: &[char], start: usize, line_no: usize, tokens: &mut Vec<Token>) -> usize {
    let mut pos = start;
    while pos < chars.len() && is_identifier_continue(chars[pos]) {
        pos += 1;
    }
    let value: String = chars[start..pos].iter().collect();
    let kind = classify_word(&value);
    tokens.push(Token::new(kind, value, line_no, start + 1));
    pos
}

fn classify_word(word: &str) -> TokenKind {
    if builtins::is_keyword(word) {
        TokenKind::Keyword
    } else if builtins::is_host_function(word) {
        TokenKind::HostFunction
    } else if builtins::is_host_property(word) {
        TokenKind::HostProperty
    } else {
        TokenKind::Identifier
    }
}

fn match_multi_char_operator(chars: &[char], pos: usize) -> Option<String> {
    let second = chars.get(pos + 1)?;
    let pair: String = [chars[pos], *second].iter().collect();
    MULTI_CHAR_OPERATORS
        .contains(&pair.as_str())
        .then_some(pair)
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    #[test]
    fn classifies_identifier_families() {
        let tokens = kinds("var x = wiggle(rotation, time);");
        assert_eq!(tokens[0], (TokenKind::Keyword, "var".into()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x".into()));
        assert_eq!(tokens[2], (TokenKind::Operator, "=".into()));
        assert_eq!(tokens[3], (TokenKind::HostFunction, "wiggle".into()));
        assert_eq!(tokens[4], (TokenKind::Punctuation, "(".into()));
        assert_eq!(tokens[5], (TokenKind::HostProperty, "rotation".into()));
        assert_eq!(tokens[6], (TokenKind::Punctuation, ",".into()));
        assert_eq!(tokens[7], (TokenKind::Identifier, "time".into()));
    }

    #[test]
    fn greedy_multi_char_operators() {
        let tokens = kinds("a == b && c += 1");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|(k, _)| *k == TokenKind::Operator)
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(ops, vec!["==", "&&", "+="]);
    }

    #[test]
    fn unary_minus_is_a_separate_operator() {
        let tokens = kinds("x = -1");
        assert_eq!(tokens[2], (TokenKind::Operator, "-".into()));
        assert_eq!(tokens[3], (TokenKind::Number, "1".into()));
    }

    #[test]
    fn comment_consumes_rest_of_line() {
        let tokens = tokenize("x = 1 // trailing note\ny = 2");
        let comment = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .unwrap();
        assert_eq!(comment.value, "// trailing note");
        assert_eq!(comment.line, 1);
        assert!(tokens.iter().any(|t| t.value == "y" && t.line == 2));
    }

    #[test]
    fn string_with_escape_and_unterminated_string() {
        let tokens = kinds(r#"s = "a\"b" + 'open"#);
        assert_eq!(tokens[2], (TokenKind::String, r#""a\"b""#.into()));
        assert_eq!(tokens[4], (TokenKind::String, "'open".into()));
    }

    #[test]
    fn number_consumes_digits_and_dots_only() {
        let tokens = kinds("3.14e2");
        assert_eq!(tokens[0], (TokenKind::Number, "3.14".into()));
        // `e2` is not part of the literal; exponents are out of dialect.
        assert_eq!(tokens[1], (TokenKind::Identifier, "e2".into()));
    }

    #[test]
    fn unknown_characters_degrade_to_punctuation() {
        let tokens = kinds("a @ b # c");
        assert_eq!(tokens[1], (TokenKind::Punctuation, "@".into()));
        assert_eq!(tokens[3], (TokenKind::Punctuation, "#".into()));
    }

    #[test]
    fn positions_are_one_based_and_monotonic() {
        let source = "var x = 10;\n  x = x + 1;";
        let tokens = tokenize(source);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].column, 1);

        let lines: Vec<&str> = source.lines().collect();
        let mut previous = (0usize, 0usize);
        for token in &tokens {
            assert!((token.line, token.column) >= previous, "order violated");
            previous = (token.line, token.column);

            let line_len = lines[token.line - 1].chars().count();
            assert!(
                token.end_column() <= line_len + 1,
                "token `{}` extends past line end",
                token.value
            );
        }
    }

    #[test]
    fn second_line_column_restarts() {
        let tokens = tokenize("a\n  b");
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].column, 3);
    }

    #[test]
    fn empty_source_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t\n").is_empty());
    }
}
