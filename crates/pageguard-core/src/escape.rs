//! HTML escaping for untrusted text.

/// Escapes the characters HTML parsing gives meaning to: `&`, `<`, `>`, `"`, `'`.
///
/// Absent input yields an empty string. The result is safe as element text
/// content and as a quoted attribute value.
///
/// Escaping is not idempotent: already-escaped text has its ampersands escaped
/// again (`&amp;` becomes `&amp;amp;`).
///
/// # Examples
///
/// - `escape_html(Some("<b>\"hi\"</b>"))` → `"&lt;b&gt;&quot;hi&quot;&lt;/b&gt;"`
/// - `escape_html(None)` → `""`
pub fn escape_html(text: Option<&str>) -> String {
    let text = match text {
        Some(t) => t,
        None => return String::new(),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
