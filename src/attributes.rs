//! Rendering of attribute lists for the pretty-printer.

/// Encode `(name, value)` pairs as a single line of markup attributes.
///
/// Pairs are space-joined in the order given. Names are written as-is;
/// values go through [`quote_attribute`].
///
/// # Examples
/// ```ignore
/// use htmls::encode_attributes;
///
/// assert_eq!(encode_attributes([("class", "btn")]), r#"class="btn""#);
/// ```
pub fn encode_attributes<I, N, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(name, value)| format!("{}={}", name.as_ref(), quote_attribute(value.as_ref())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape and quote an attribute value.
///
/// `&`, `<` and `>` are always escaped, as are newlines, carriage returns
/// and tabs (as numeric references, so they survive attribute-value
/// normalization). Double quotes are preferred; a value containing `"` but
/// no `'` is single-quoted instead, and a value containing both is
/// double-quoted with `"` written as `&quot;`.
pub fn quote_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            _ => escaped.push(c),
        }
    }

    if !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else if !escaped.contains('\'') {
        format!("'{}'", escaped)
    } else {
        format!("\"{}\"", escaped.replace('"', "&quot;"))
    }
}
