//! Text formatter for the expression dialect.
//!
//! Formatting runs ten ordered whole-string passes over the source, each
//! gated by a [`FormatOptions`] flag where the behavior is optional. The
//! passes work on raw text and regular expressions, not tokens, so a
//! pattern occurring inside a string literal can be rewritten too. That
//! trade keeps formatting robust on partial, mid-edit sources.
//!
//! ```
//! use exprlint_fmt::{format, FormatOptions};
//!
//! let out = format("a=b+1", &FormatOptions::default());
//! assert_eq!(out, "a = b + 1;\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod options;
mod passes;

pub use engine::{format, format_range, try_format, FormatError, FormatRange};
pub use options::{FormatOptions, IndentStyle, QuoteStyle};
