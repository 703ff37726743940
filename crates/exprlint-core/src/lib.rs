//! # exprlint-core
//!
//! Core engine for linting host-application scripting expressions: a
//! hand-rolled tokenizer for the constrained, JavaScript-like expression
//! dialect, the [`Rule`] trait, and the [`Linter`] that orchestrates rule
//! execution.
//!
//! Everything here is a pure, synchronous transform over a string. The
//! engine performs no I/O, never talks to the host scripting environment,
//! and degrades gracefully on malformed input: the tokenizer cannot fail,
//! and a panicking rule is skipped without aborting the run.
//!
//! ## Example
//!
//! ```ignore
//! use exprlint_core::{Linter, LintOptions};
//!
//! let linter = Linter::builder().rules(my_rules).build();
//! let diagnostics = linter.lint("rotation = time * 45;", &LintOptions::default());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builtins;
mod config;
mod context;
mod lexer;
mod linter;
mod rule;
mod token;
mod types;

/// Text helpers shared by rule implementations.
pub mod utils;

pub use config::{LintOptions, DEFAULT_MAX_COMPLEXITY, DEFAULT_MAX_LINE_LENGTH};
pub use context::{Declaration, ExprContext};
pub use lexer::tokenize;
pub use linter::{Linter, LinterBuilder};
pub use rule::{Rule, RuleBox, RuleCategory, RuleInfo};
pub use token::{Token, TokenKind};
pub use types::{Diagnostic, DiagnosticReport, Severity};
