//! URL sanitization for href/src attributes.
//!
//! Untrusted candidates either come back as an absolute `http`/`https` URL, a
//! root-relative path, or the empty string when no safe value exists.

mod clean;
mod resolver;

pub use clean::{is_protocol_relative, is_root_relative, strip_controls};
pub use resolver::{OriginResolver, UrlResolver};

/// Schemes a resolved URL may carry.
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Sanitizes a URL candidate for use as an attribute value.
///
/// Control characters are stripped and surrounding whitespace trimmed first.
/// Protocol-relative input (`//host`) is rejected; root-relative paths pass
/// through as cleaned. Anything else goes through `resolver` and is kept only
/// when it resolves to an `http` or `https` URL. Rejection is the empty string;
/// no error reaches the caller.
///
/// # Examples
///
/// - `sanitize_url(&r, Some("https://example.com/a"))` → `"https://example.com/a"`
/// - `sanitize_url(&r, Some("javascript:alert(1)"))` → `""`
/// - `sanitize_url(&r, Some("/local/path"))` → `"/local/path"`
pub fn sanitize_url<R: UrlResolver + ?Sized>(resolver: &R, candidate: Option<&str>) -> String {
    let raw = match candidate {
        Some(c) if !c.is_empty() => c,
        _ => return String::new(),
    };

    let cleaned = strip_controls(raw);
    if cleaned.is_empty() {
        return String::new();
    }

    if is_protocol_relative(&cleaned) {
        tracing::debug!(candidate = %cleaned, "rejected protocol-relative url");
        return String::new();
    }
    if is_root_relative(&cleaned) {
        return cleaned;
    }

    match resolver.resolve(&cleaned) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => url.into(),
        Ok(url) => {
            tracing::debug!(scheme = url.scheme(), "rejected url with disallowed scheme");
            String::new()
        }
        Err(e) => {
            tracing::debug!(candidate = %cleaned, error = %e, "rejected unparseable url");
            String::new()
        }
    }
}
