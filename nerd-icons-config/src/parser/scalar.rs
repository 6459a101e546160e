//! Scalar helpers: key/value cleanup, booleans and the inline-value test.

/// Strip an inline ` #` comment and one layer of matching quotes.
pub(crate) fn strip_value(raw: &str) -> String {
    let mut value = raw.trim();

    if let Some(pos) = value.find(" #") {
        value = value[..pos].trim();
    }

    unquote(value).to_string()
}

/// Trim a key and remove matching surrounding quotes. Case is preserved.
pub(crate) fn normalize_key(raw: &str) -> String {
    unquote(raw.trim()).to_string()
}

fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parse a boolean literal.
///
/// `true/yes/1/on` and `false/no/0/off` are recognised case-insensitively;
/// anything else is `false`.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "1" | "on"
    )
}

/// Whether the text after `key:` is an inline value.
///
/// Empty text, block/flow indicators (`| > { [`) and a comment-only tail mean
/// the entry opens a nested block instead. A bare `#rrggbb` color is inline.
pub(crate) fn is_inline_value(rest: &str) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        None => false,
        Some('|' | '>' | '{' | '[') => false,
        Some('#') => !matches!(chars.next(), None | Some(' ')),
        Some(_) => true,
    }
}

/// Leading whitespace width of a raw line, in characters.
pub(crate) fn indent_of(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count()
}
