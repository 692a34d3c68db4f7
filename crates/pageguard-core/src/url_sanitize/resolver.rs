//! URL resolution capability and its `url`-crate implementation.

use crate::error::PageguardError;
use url::Url;

/// Parses a cleaned candidate into an absolute URL, resolving relative input
/// against the page when the implementation has one.
pub trait UrlResolver {
    fn resolve(&self, input: &str) -> Result<Url, url::ParseError>;
}

/// Resolver over the `url` crate with an optional page origin as base.
///
/// Without an origin, only absolute URLs resolve; relative input fails with
/// [`url::ParseError::RelativeUrlWithoutBase`].
#[derive(Debug, Clone, Default)]
pub struct OriginResolver {
    base: Option<Url>,
}

impl OriginResolver {
    /// Resolver with no page context.
    pub fn detached() -> Self {
        Self::default()
    }

    /// Resolver for a page served from `origin`.
    ///
    /// Any path, query, or fragment on `origin` is dropped; only scheme, host
    /// and port are kept. The origin must be `http` or `https`.
    pub fn with_origin(origin: &str) -> Result<Self, PageguardError> {
        let parsed =
            Url::parse(origin).map_err(|e| PageguardError::InvalidOrigin(origin.to_string(), e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PageguardError::UnsupportedOriginScheme(origin.to_string()));
        }
        let serialized = parsed.origin().ascii_serialization();
        let base = Url::parse(&serialized)
            .map_err(|e| PageguardError::InvalidOrigin(origin.to_string(), e))?;
        Ok(Self { base: Some(base) })
    }

    pub fn origin(&self) -> Option<&Url> {
        self.base.as_ref()
    }
}

impl UrlResolver for OriginResolver {
    fn resolve(&self, input: &str) -> Result<Url, url::ParseError> {
        Url::options().base_url(self.base.as_ref()).parse(input)
    }
}
