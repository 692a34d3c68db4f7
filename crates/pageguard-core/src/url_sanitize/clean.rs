//! Candidate cleaning and path-shape checks.

/// Removes C0 control characters and DEL anywhere in `candidate`, then trims
/// surrounding whitespace.
///
/// Tabs and newlines are controls too, so `java\tscript:` collapses to
/// `javascript:` before any scheme check sees it.
pub fn strip_controls(candidate: &str) -> String {
    let stripped: String = candidate
        .chars()
        .filter(|&c| !matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}'))
        .collect();
    stripped.trim().to_string()
}

fn is_slash(c: char) -> bool {
    c == '/' || c == '\\'
}

/// True for `//host` and its backslash spellings, which URL parsers resolve to
/// another host under the page's scheme.
pub fn is_protocol_relative(cleaned: &str) -> bool {
    let mut chars = cleaned.chars();
    matches!((chars.next(), chars.next()), (Some(a), Some(b)) if is_slash(a) && is_slash(b))
}

/// True for a path starting with exactly one `/`.
pub fn is_root_relative(cleaned: &str) -> bool {
    cleaned.starts_with('/') && !is_protocol_relative(cleaned)
}
