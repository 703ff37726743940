//! Pass 10: line-length wrapping.

/// Break tokens in preference order when several end at the same column.
const BREAK_TOKENS: &[&str] = &[
    ",", "&&", "||", "==", "!=", "<=", ">=", "+", "-", "*", "/", "<", ">",
];

/// Extra indentation for continuation lines, two spaces deeper.
const CONTINUATION_INDENT: &str = "  ";

/// Wraps every line longer than `max` columns, measuring tabs as
/// `tab_size` columns wide.
pub(crate) fn wrap_lines(lines: Vec<String>, max: usize, tab_size: usize) -> Vec<String> {
    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        wrap_line(line, max, tab_size, &mut wrapped);
    }
    wrapped
}

fn wrap_line(line: String, max: usize, tab_size: usize, out: &mut Vec<String>) {
    if measure(&line, tab_size) <= max {
        out.push(line);
        return;
    }

    let indent: String = line.chars().take_while(|c| c.is_whitespace()).collect();
    let continuation_indent = format!("{indent}{CONTINUATION_INDENT}");

    // A budget the continuation indent already exhausts cannot make
    // progress; emit the line as-is rather than loop.
    if measure(&continuation_indent, tab_size) + 1 >= max {
        out.push(line);
        return;
    }

    let chars: Vec<char> = line.chars().collect();
    let split_at = find_break(&chars, max).unwrap_or(max.min(chars.len()));

    let head: String = chars[..split_at].iter().collect();
    let tail: String = chars[split_at..].iter().collect();
    let tail = tail.trim_start();

    out.push(head.trim_end().to_string());
    if tail.is_empty() {
        return;
    }
    wrap_line(format!("{continuation_indent}{tail}"), max, tab_size, out);
}

/// Finds the end of the last preferred break token at or before the
/// `max`-character budget.
fn find_break(chars: &[char], max: usize) -> Option<usize> {
    let budget = max.min(chars.len());
    let prefix: String = chars[..budget].iter().collect();

    let mut best: Option<usize> = None;
    for token in BREAK_TOKENS {
        if let Some(pos) = prefix.rfind(token) {
            let char_pos = prefix[..pos].chars().count();
            let end = char_pos + token.chars().count();
            if best.map_or(true, |b| end > b) {
                best = Some(end);
            }
        }
    }
    // A break inside the indent would spin forever.
    best.filter(|&end| chars[..end].iter().any(|c| !c.is_whitespace()))
}

/// Measures a line in columns, counting tabs as `tab_size` wide.
fn measure(line: &str, tab_size: usize) -> usize {
    line.chars()
        .map(|c| if c == '\t' { tab_size.max(1) } else { 1 })
        .sum()
}
