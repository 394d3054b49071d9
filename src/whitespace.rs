//! Whitespace handling shared by the pretty-printer and the text accessors
//! on [`Element`](crate::Element).

/// Normalize whitespace.
///
/// Every run of whitespace (space, tab, newline, carriage return,
/// non-breaking space and any other Unicode whitespace) becomes a single
/// ASCII space, and the result is trimmed at both ends.
///
/// # Examples
/// ```ignore
/// use htmls::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a\t\nb  "), "a b");
/// assert_eq!(normalize_whitespace("Cruel\u{a0}\u{a0}World"), "Cruel World");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const INDENT_CHARS: [char; 2] = [' ', '\t'];

/// Remove the leading spaces/tabs that every non-blank line has in common.
///
/// Lines made only of spaces and tabs are emptied and do not take part in
/// computing the common margin.
pub(crate) fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !is_blank(line))
        .map(leading_indent)
        .reduce(common_prefix)
        .unwrap_or("");

    text.lines()
        .map(|line| if is_blank(line) { "" } else { &line[margin.len()..] })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim_matches(INDENT_CHARS).is_empty()
}

fn leading_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches(INDENT_CHARS).len()]
}

// Only ever called on runs of ASCII spaces and tabs, so byte offsets are
// char boundaries.
fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}
