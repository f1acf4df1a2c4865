//! HTML escaping for data-derived text.
//!
//! Every label or value that originates outside the widget must pass
//! through [`escape`] before it is inserted into markup. The function is
//! deliberately standalone so the neutralization step stays testable on
//! its own rather than being buried in string assembly.

/// Escape markup-significant characters in `text`.
///
/// Neutralizes `&`, `<`, `>`, `"` and `'` so untrusted dashboard data
/// cannot inject markup.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse [`escape`].
///
/// `&amp;` is decoded last so doubly-escaped input is not collapsed
/// twice; `unescape(escape(s)) == s` for every `s`.
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
