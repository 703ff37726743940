//! Layout passes: line endings, trailing whitespace, indentation.

use super::Patterns;

/// Pass 1: normalize `\r\n` and bare `\r` to `\n`.
pub(crate) fn normalize_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Pass 2: strip trailing whitespace from every line.
pub(crate) fn trim_trailing_whitespace(lines: &mut [String]) {
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed.len() != line.len() {
            *line = trimmed.to_string();
        }
    }
}

/// Pass 3: re-indent with a running level.
///
/// The level drops *before* indenting a line that begins with a closing
/// bracket, and rises *after* indenting a line that ends with an opening
/// bracket or is a brace-less control header (`if (...)`, `for (...)`,
/// `while (...)`). The control-header bump indents the following line and
/// nothing pulls it back; that mirrors the original single-statement
/// heuristic.
pub(crate) fn reindent(lines: &mut [String], unit: &str, patterns: &Patterns) {
    let mut level: usize = 0;

    for line in lines {
        let body = line.trim().to_string();
        if body.is_empty() {
            line.clear();
            continue;
        }

        if body.starts_with('}') || body.starts_with(')') || body.starts_with(']') {
            level = level.saturating_sub(1);
        }

        *line = format!("{}{body}", unit.repeat(level));

        if body.ends_with('{') || body.ends_with('(') || body.ends_with('[') {
            level += 1;
        } else if patterns.control_header.is_match(&body) {
            level += 1;
        }
    }
}
