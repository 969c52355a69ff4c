//! JavaScript string literals.

use super::unicode_format::{is_format_char, push_unicode_escape};

/// Quote `value` as a JavaScript string literal delimited by `quote`.
///
/// Control characters and Unicode format characters are written as
/// escapes so the literal survives being pasted into any source file.
pub fn quote_js_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            // U+2028/2029 end a line inside pre-ES2019 string literals.
            '\u{2028}' | '\u{2029}' => push_unicode_escape(&mut out, ch),
            c if (c as u32) < 0x20 || c == '\x7F' || is_format_char(c) => {
                push_unicode_escape(&mut out, c)
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
#[path = "../tests/literals_tests.rs"]
mod tests;
