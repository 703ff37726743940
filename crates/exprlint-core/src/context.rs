//! Context handed to lint rules.

use crate::builtins;
use crate::token::{Token, TokenKind};

/// A variable declaration found in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared variable name.
    pub name: String,
    /// Declaration keyword (`var`, `let`, or `const`).
    pub keyword: String,
    /// Index of the keyword token in the stream.
    pub keyword_index: usize,
    /// Index of the identifier token in the stream.
    pub ident_index: usize,
}

/// Context for a single lint run: the raw source, its lines, and the token
/// stream.
///
/// There is no syntax tree; the flat token list stands in for one, and all
/// checks are token-pattern heuristics over it. That is an intentional
/// simplification for this constrained dialect.
#[derive(Debug)]
pub struct ExprContext<'a> {
    /// Raw source text.
    pub source: &'a str,
    /// Source split into lines, without terminators.
    pub lines: Vec<&'a str>,
    /// Full ordered token list.
    pub tokens: &'a [Token],
}

impl<'a> ExprContext<'a> {
    /// Creates a context over `source` and its token stream.
    #[must_use]
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            lines: source.lines().collect(),
            tokens,
        }
    }

    /// Text of the 1-based line `line`, or `""` when out of range.
    #[must_use]
    pub fn line_text(&self, line: usize) -> &'a str {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .copied()
            .unwrap_or("")
    }

    /// Variable declarations, in source order.
    ///
    /// A declaration is a `var`/`let`/`const` keyword immediately followed by
    /// an identifier token on the same line. The returned order is the
    /// insertion order, so suggestion lists built from it are deterministic.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if token.kind != TokenKind::Keyword || !is_declaration_keyword(&token.value) {
                continue;
            }
            let Some(next) = self.tokens.get(idx + 1) else {
                continue;
            };
            if next.kind == TokenKind::Identifier && next.line == token.line {
                declarations.push(Declaration {
                    name: next.value.clone(),
                    keyword: token.value.clone(),
                    keyword_index: idx,
                    ident_index: idx + 1,
                });
            }
        }
        declarations
    }

    /// Declared variable names, insertion-ordered and de-duplicated.
    #[must_use]
    pub fn declared_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for declaration in self.declarations() {
            if !names.contains(&declaration.name) {
                names.push(declaration.name);
            }
        }
        names
    }

    /// Returns `true` if `name` is declared or implicitly available
    /// (host global or host function allow-list).
    #[must_use]
    pub fn is_known_identifier(&self, name: &str, declared: &[String]) -> bool {
        declared.iter().any(|n| n == name)
            || builtins::is_host_global(name)
            || builtins::is_host_function(name)
    }
}

fn is_declaration_keyword(word: &str) -> bool {
    matches!(word, "var" | "let" | "const")
}
