//! Shell-style glob matching for host patterns.
//!
//! Supports `*`, `?`, `[seq]` and `[!seq]`. A `[` without a closing `]` is a
//! literal. Patterns are translated to an anchored regular expression and
//! matched with the `regex` crate; callers lowercase both sides beforehand.

use regex::Regex;

/// Translate a glob into an anchored regex source string.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::from(r"(?s)\A");
    let mut literal = String::new();
    let mut i = 0;

    let flush = |out: &mut String, literal: &mut String| {
        if !literal.is_empty() {
            out.push_str(&regex::escape(literal));
            literal.clear();
        }
    };

    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                flush(&mut out, &mut literal);
                while i < n && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => {
                flush(&mut out, &mut literal);
                out.push('.');
            }
            '[' => {
                let mut j = i;
                if j < n && chars[j] == '!' {
                    j += 1;
                }
                if j < n && chars[j] == ']' {
                    j += 1;
                }
                while j < n && chars[j] != ']' {
                    j += 1;
                }
                if j >= n {
                    literal.push('[');
                    continue;
                }
                flush(&mut out, &mut literal);
                out.push_str(&char_class(&chars[i..j]));
                i = j + 1;
            }
            _ => literal.push(c),
        }
    }

    flush(&mut out, &mut literal);
    out.push_str(r"\z");
    out
}

/// Build a regex class from the contents of a `[...]` glob set.
fn char_class(set: &[char]) -> String {
    let (negated, body) = match set.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, set),
    };

    let mut class = String::from("[");
    if negated {
        class.push('^');
    }
    for &c in body {
        if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
            class.push('\\');
        }
        class.push(c);
    }
    class.push(']');
    class
}

/// Whether `text` matches the glob `pattern` in full.
///
/// A pattern whose translation fails to compile matches nothing.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    match Regex::new(&glob_to_regex(pattern)) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            log::debug!("Invalid host glob {:?}: {}", pattern, e);
            false
        }
    }
}
