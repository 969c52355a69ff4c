//! Escaping of Unicode format characters (general category `Cf`).
//!
//! Format characters such as U+200B ZERO WIDTH SPACE or U+202E RIGHT-TO-LEFT
//! OVERRIDE are invisible in listings and diffs but still change what a
//! string literal means. Emitted JavaScript spells them as `\uXXXX` escapes.

use std::borrow::Cow;
use std::fmt::Write;

pub use tmplc_common::unicode::is_format_char;

/// Append `ch` as one `\uXXXX` escape, or a surrogate pair of them outside
/// the basic multilingual plane.
pub(crate) fn push_unicode_escape(out: &mut String, ch: char) {
    let mut units = [0u16; 2];
    for unit in ch.encode_utf16(&mut units) {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\u{:04X}", unit);
    }
}

/// Replace every format character in `input` with its `\uXXXX` escape.
///
/// Returns the input unchanged, without allocating, when there is nothing
/// to escape. The escapes are plain ASCII, so escaping twice is a no-op.
pub fn escape_format_chars(input: &str) -> Cow<'_, str> {
    let Some(first) = input.char_indices().find(|&(_, ch)| is_format_char(ch)) else {
        return Cow::Borrowed(input);
    };

    let (prefix, rest) = input.split_at(first.0);
    let mut out = String::with_capacity(input.len() * 4 / 3 + 6);
    out.push_str(prefix);
    for ch in rest.chars() {
        if is_format_char(ch) {
            push_unicode_escape(&mut out, ch);
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../tests/unicode_format_tests.rs"]
mod tests;
