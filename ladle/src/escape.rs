//! Entity escaping for text content and attribute values.
//!
//! Only the fixed set `&`, `<`, `>` and (for attribute values) `"` is
//! replaced. Everything else, including non-ASCII text, passes through as-is.

use std::borrow::Cow;

fn needs_escape(byte: u8, escape_quotes: bool) -> bool {
    matches!(byte, b'&' | b'<' | b'>') || (escape_quotes && byte == b'"')
}

fn entity(byte: u8) -> &'static str {
    match byte {
        b'&' => "&amp;",
        b'<' => "&lt;",
        b'>' => "&gt;",
        _ => "&quot;",
    }
}

/// Escape `text`, returning it borrowed when nothing had to change.
///
/// `"` is only replaced when `escape_quotes` is set, which is what attribute
/// values need; text content leaves quotes alone.
///
/// ```
/// use ladle::escape;
///
/// assert_eq!(escape("&><", false), "&amp;&gt;&lt;");
/// assert_eq!(escape("a\"b", true), "a&quot;b");
/// assert_eq!(escape("a\"b", false), "a\"b");
/// ```
pub fn escape(text: &str, escape_quotes: bool) -> Cow<'_, str> {
    if !text.bytes().any(|b| needs_escape(b, escape_quotes)) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    escape_into(&mut out, text, escape_quotes);
    Cow::Owned(out)
}

/// Append the escaped form of `text` to `out`.
pub fn escape_into(out: &mut String, text: &str, escape_quotes: bool) {
    // All triggers are ASCII, so slicing at their byte offsets stays on
    // char boundaries.
    let mut last = 0;
    for (i, byte) in text.bytes().enumerate() {
        if needs_escape(byte, escape_quotes) {
            out.push_str(&text[last..i]);
            out.push_str(entity(byte));
            last = i + 1;
        }
    }
    out.push_str(&text[last..]);
}
