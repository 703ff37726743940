//! Formatting driver: ten ordered passes with a fail-safe contract.

use crate::options::FormatOptions;
use crate::passes;

use thiserror::Error;
use tracing::warn;

/// Internal failure of a formatting pass.
///
/// Callers of [`format`] never see this; the original text is returned
/// instead and the failure goes to the log. [`try_format`] exposes it for
/// integrations that want their own side channel.
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    /// A text pattern failed to compile.
    #[error("invalid format pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A 1-based, inclusive line range to reformat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRange {
    /// First line of the range.
    pub start_line: usize,
    /// Last line of the range.
    pub end_line: usize,
}

impl FormatRange {
    /// Creates a range covering `start_line..=end_line`.
    #[must_use]
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }
}

/// Formats `source` under `options`.
///
/// Deterministic: identical `(text, options)` always yields identical
/// output. If any pass fails internally the *original, unmodified* input
/// comes back and the failure is logged; formatting never raises to the
/// caller.
#[must_use]
pub fn format(source: &str, options: &FormatOptions) -> String {
    match try_format(source, options) {
        Ok(formatted) => formatted,
        Err(error) => {
            warn!(%error, "formatting pass failed, returning input unchanged");
            source.to_string()
        }
    }
}

/// Formats `source`, surfacing pass failures to the caller.
///
/// # Errors
///
/// Returns the first pass failure instead of falling back to the input.
pub fn try_format(source: &str, options: &FormatOptions) -> Result<String, FormatError> {
    let patterns = passes::patterns()?;

    // Pass 1: one line-ending form.
    let text = passes::normalize_line_endings(source);
    let mut lines: Vec<String> = text.split('\n').map(String::from).collect();

    // Pass 2: trailing whitespace.
    if options.trim_trailing_whitespace {
        passes::trim_trailing_whitespace(&mut lines);
    }

    // Pass 3: indentation.
    passes::reindent(&mut lines, &options.indent_unit(), patterns);

    // Pass 4: bracket spacing.
    if options.bracket_spacing {
        for line in &mut lines {
            *line = passes::bracket_spacing(line, patterns);
        }
    }

    // Pass 5: call parentheses.
    for line in &mut lines {
        *line = passes::tighten_call_parens(line, patterns);
    }

    // Pass 6: operator spacing.
    for line in &mut lines {
        *line = passes::space_operators(line, patterns);
    }

    // Pass 7: comma spacing.
    for line in &mut lines {
        *line = passes::space_commas(line, patterns);
    }

    // Pass 8: statement semicolons.
    if options.semicolons {
        passes::insert_semicolons(&mut lines, patterns);
    }

    // Pass 9: quote style.
    passes::normalize_quotes(&mut lines, options.quote_style, patterns);

    // Pass 10: line wrapping.
    if options.max_line_length > 0 {
        lines = passes::wrap_lines(lines, options.max_line_length, options.tab_size);
    }

    let mut formatted = lines.join("\n");
    if options.insert_final_newline && !formatted.ends_with('\n') {
        formatted.push('\n');
    }
    Ok(formatted)
}

/// Formats only the lines covered by `range` and returns the replacement
/// text for that range, to be spliced in verbatim by the caller.
///
/// The trailing-newline option is suppressed unless the range reaches the
/// last line, so splicing never grows the document by a line.
#[must_use]
pub fn format_range(source: &str, options: &FormatOptions, range: FormatRange) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return format(source, options);
    }

    let start = range.start_line.max(1);
    let end = range.end_line.min(lines.len());
    if start > end {
        return String::new();
    }

    let slice = lines[start - 1..end].join("\n");
    let mut effective = options.clone();
    if end < lines.len() {
        effective.insert_final_newline = false;
    }
    format(&slice, &effective)
}
