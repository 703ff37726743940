//! Spacing passes: bracket padding, call parentheses, operators, commas.

use super::{split_indent, Patterns};

/// Control keywords whose parenthesis keeps its spacing in pass 5.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "catch", "function", "return", "typeof", "new",
];

/// Pass 4: pad the inside of non-empty `{}`/`[]` pairs.
pub(crate) fn bracket_spacing(line: &str, patterns: &Patterns) -> String {
    let line = patterns.open_brace.replace_all(line, "{ $1");
    let line = patterns.close_brace.replace_all(&line, "$1 }");
    let line = patterns.open_bracket.replace_all(&line, "[ $1");
    patterns.close_bracket.replace_all(&line, "$1 ]").into_owned()
}

/// Pass 5: remove whitespace between a call and its opening parenthesis.
/// Control keywords are left untouched.
pub(crate) fn tighten_call_parens(line: &str, patterns: &Patterns) -> String {
    patterns
        .call_paren
        .replace_all(line, |caps: &regex::Captures<'_>| {
            let word = &caps[1];
            if CONTROL_KEYWORDS.contains(&word) {
                caps[0].to_string()
            } else {
                format!("{word}(")
            }
        })
        .into_owned()
}

/// Pass 6: wrap binary operators in exactly one space, collapse interior
/// space runs, then pull spaces back off unary `++`/`--`/`!`.
///
/// The indent prefix is held aside so collapsing space runs cannot eat it.
pub(crate) fn space_operators(line: &str, patterns: &Patterns) -> String {
    let (indent, rest) = split_indent(line);
    if rest.is_empty() {
        return line.to_string();
    }

    let spaced = patterns.operators.replace_all(rest, " $1 ");
    let collapsed = patterns.space_runs.replace_all(&spaced, " ");
    let collapsed = collapsed.trim_end();
    let tightened = patterns.before_incdec.replace_all(collapsed, "$1");
    let tightened = patterns.after_incdec.replace_all(&tightened, "$1");
    let tightened = patterns.bang_space.replace_all(&tightened, "!");

    format!("{indent}{}", tightened.trim_start())
}

/// Pass 7: normalize comma spacing to `", "`.
pub(crate) fn space_commas(line: &str, patterns: &Patterns) -> String {
    let (indent, rest) = split_indent(line);
    if rest.is_empty() {
        return line.to_string();
    }
    let spaced = patterns.comma.replace_all(rest, ", ");
    format!("{indent}{}", spaced.trim_end())
}
