//! Sanitization utility and page behaviors for the homework manager's web forms.
//!
//! The three utility entry points are re-exported here: [`escape_html`],
//! [`assign_text_safely`] and [`sanitize_url`].

pub mod config;
pub mod error;
pub mod escape;
pub mod logging;
pub mod page;
pub mod text;
pub mod url_sanitize;
pub mod validation;

pub use error::PageguardError;
pub use escape::escape_html;
pub use text::{assign_text_safely, TextNode, TextTarget};
pub use url_sanitize::{sanitize_url, OriginResolver, UrlResolver};
