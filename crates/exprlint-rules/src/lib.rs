//! # exprlint-rules
//!
//! Built-in lint rules for exprlint.
//!
//! Ten independent token-stream heuristics over the expression dialect; no
//! rule depends on another's output, and the engine runs them in the fixed
//! order of [`default_rules`].
//!
//! ## Available Rules
//!
//! | Id | Severity | Description |
//! |----|----------|-------------|
//! | `no-undefined-variables` | error | Identifier with no declaration or host binding |
//! | `no-deprecated-functions` | warning | Deprecated host function, with replacement fix |
//! | `prefer-modern-syntax` | info | `var` and anonymous `function(` literals |
//! | `no-infinite-loops` | error | Textual `while(true)` detection |
//! | `max-complexity` | warning | Branch/logical-operator score above the ceiling |
//! | `no-unused-variables` | warning | Declared variable with zero identifier uses |
//! | `prefer-const` | info | `var` that is never reassigned |
//! | `no-magic-numbers` | info | Unexplained numeric literal |
//! | `consistent-naming` | info | Identifier that is not camelCase |
//! | `performance-warnings` | warning | Expensive host call inside a loop body |
//!
//! ## Usage
//!
//! ```ignore
//! use exprlint_core::{Linter, LintOptions};
//! use exprlint_rules::default_rules;
//!
//! let linter = Linter::builder().rules(default_rules()).build();
//! let diagnostics = linter.lint(source, &LintOptions::default());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalogue;
mod consistent_naming;
mod max_complexity;
mod no_deprecated_functions;
mod no_infinite_loops;
mod no_magic_numbers;
mod no_undefined_variables;
mod no_unused_variables;
mod performance_warnings;
mod prefer_const;
mod prefer_modern_syntax;

pub use catalogue::{catalogue, default_rules};
pub use consistent_naming::ConsistentNaming;
pub use max_complexity::MaxComplexity;
pub use no_deprecated_functions::NoDeprecatedFunctions;
pub use no_infinite_loops::NoInfiniteLoops;
pub use no_magic_numbers::NoMagicNumbers;
pub use no_undefined_variables::NoUndefinedVariables;
pub use no_unused_variables::NoUnusedVariables;
pub use performance_warnings::PerformanceWarnings;
pub use prefer_const::PreferConst;
pub use prefer_modern_syntax::PreferModernSyntax;

/// Re-export core types for convenience.
pub use exprlint_core::{Diagnostic, Rule, RuleInfo, Severity};
