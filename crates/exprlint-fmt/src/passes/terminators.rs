//! Statement terminators and quote style.

use super::Patterns;
use crate::options::QuoteStyle;

/// Characters that already close a line: terminators, separators, opening
/// brackets, and the block-closing brace.
const LINE_CLOSERS: &[char] = &[';', ',', '{', '}', '(', '['];

/// Pass 8: append `;` to statement lines that lack a terminator.
///
/// A line is a statement candidate when it contains a declaration keyword,
/// a plain (non-comparison, non-compound) `=`, or a call pattern whose
/// callee is not a control keyword. Comment lines and lines already ending
/// in a terminator or bracket are skipped.
pub(crate) fn insert_semicolons(lines: &mut [String], patterns: &Patterns) {
    for line in lines {
        let body = line.trim_end();
        let trimmed = body.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if body.ends_with(LINE_CLOSERS) {
            continue;
        }
        if is_statement_candidate(trimmed, patterns) {
            *line = format!("{body};");
        }
    }
}

fn is_statement_candidate(line: &str, patterns: &Patterns) -> bool {
    patterns.declaration.is_match(line)
        || has_plain_assignment(line)
        || has_call_pattern(line, patterns)
}

/// Finds an `=` that is neither part of a comparison (`==`, `!=`, `<=`,
/// `>=`) nor a compound assignment (`+=` and friends).
fn has_plain_assignment(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    for (idx, &ch) in chars.iter().enumerate() {
        if ch != '=' {
            continue;
        }
        let prev = idx.checked_sub(1).map(|i| chars[i]);
        let next = chars.get(idx + 1);
        let compound = matches!(prev, Some('=' | '!' | '<' | '>' | '+' | '-' | '*' | '/'));
        if !compound && next != Some(&'=') {
            return true;
        }
    }
    false
}

fn has_call_pattern(line: &str, patterns: &Patterns) -> bool {
    const CONTROL: &[&str] = &["if", "else", "for", "while", "do", "switch", "catch", "return"];
    patterns
        .call_paren_any
        .captures_iter(line)
        .any(|caps| !CONTROL.contains(&&caps[1]))
}

/// Pass 9: normalize string quotes with a naive regex swap.
///
/// Literals containing the opposite quote or escaped quotes are not
/// handled robustly; retained limitation of the text-based design.
pub(crate) fn normalize_quotes(lines: &mut [String], style: QuoteStyle, patterns: &Patterns) {
    for line in lines {
        let swapped = match style {
            QuoteStyle::Single => patterns.double_quoted.replace_all(line, "'$1'"),
            QuoteStyle::Double => patterns.single_quoted.replace_all(line, "\"$1\""),
        };
        if swapped != *line {
            *line = swapped.into_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::patterns;
    use super::*;

    fn run_semicolons(source: &str) -> Vec<String> {
        let mut lines: Vec<String> = source.split('\n').map(String::from).collect();
        insert_semicolons(&mut lines, patterns().unwrap());
        lines
    }

    #[test]
    fn terminates_assignments_declarations_and_calls() {
        assert_eq!(run_semicolons("x = 1"), vec!["x = 1;"]);
        assert_eq!(run_semicolons("var x = 1"), vec!["var x = 1;"]);
        assert_eq!(run_semicolons("wiggle(5, 10)"), vec!["wiggle(5, 10);"]);
    }

    #[test]
    fn leaves_terminated_and_block_lines_alone() {
        assert_eq!(run_semicolons("x = 1;"), vec!["x = 1;"]);
        assert_eq!(run_semicolons("if (a) {"), vec!["if (a) {"]);
        assert_eq!(run_semicolons("}"), vec!["}"]);
    }

    #[test]
    fn comparisons_and_control_headers_are_not_statements() {
        assert_eq!(run_semicolons("a == b"), vec!["a == b"]);
        assert_eq!(run_semicolons("if (a > b)"), vec!["if (a > b)"]);
    }

    #[test]
    fn compound_assignment_counts_via_call_or_decl_only() {
        // `+=` alone is not a plain `=`; the heuristic leaves it be.
        assert_eq!(run_semicolons("x += 1"), vec!["x += 1"]);
    }

    #[test]
    fn comment_lines_are_skipped() {
        assert_eq!(run_semicolons("// x = 1"), vec!["// x = 1"]);
    }

    #[test]
    fn quote_normalization_swaps_styles() {
        let p = patterns().unwrap();

        let mut lines = vec![r#"s = "hello" + "world""#.to_string()];
        normalize_quotes(&mut lines, QuoteStyle::Single, p);
        assert_eq!(lines[0], "s = 'hello' + 'world'");

        let mut lines = vec!["s = 'hello'".to_string()];
        normalize_quotes(&mut lines, QuoteStyle::Double, p);
        assert_eq!(lines[0], r#"s = "hello""#);
    }

    #[test]
    fn matching_style_is_untouched() {
        let p = patterns().unwrap();
        let mut lines = vec!["s = 'fine'".to_string()];
        normalize_quotes(&mut lines, QuoteStyle::Single, p);
        assert_eq!(lines[0], "s = 'fine'");
    }
}
