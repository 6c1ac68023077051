use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// Whitespace is ASCII-only: non-ASCII spaces are stripped like any other
// disallowed character.
pub static RE_DISALLOWED_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_ \t\n\x0B\x0C\r]").ok());

pub static RE_WHITESPACE_RUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").ok());

/// Remove every character that is not an ASCII letter, digit, underscore,
/// or ASCII whitespace.
pub fn strip_disallowed(input: &str) -> Cow<'_, str> {
    replace_all(input, &RE_DISALLOWED_CHARS, "")
}

/// Replace each whitespace run with one underscore.
pub fn collapse_whitespace(input: &str) -> Cow<'_, str> {
    replace_all(input, &RE_WHITESPACE_RUN, "_")
}

/// A pattern that failed to compile matches nothing.
fn replace_all<'a>(
    input: &'a str,
    regex: &LazyLock<Option<Regex>>,
    replacement: &str,
) -> Cow<'a, str> {
    let Some(re) = regex.as_ref() else {
        return Cow::Borrowed(input);
    };
    re.replace_all(input, replacement)
}
