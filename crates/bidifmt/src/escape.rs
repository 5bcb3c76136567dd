//! Minimal HTML escaping for the markup wrap variant
//!
//! `span_wrap` escapes its input on every path, wrapped or not, so the
//! result can be spliced into markup verbatim. Only the three characters
//! that matter for text content are rewritten; attribute contexts are
//! not a target here.

use std::borrow::Cow;

/// Escape `&`, `<`, and `>` for use as HTML text content
///
/// Borrows the input back untouched when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
