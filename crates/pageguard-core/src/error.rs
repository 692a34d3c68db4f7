//! Error type for the pageguard core library.
//!
//! The sanitization utility itself never fails; these errors come from the
//! surrounding setup (configuration, page origin, behavior policies).

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PageguardError {
    #[error("invalid page origin '{0}': {1}")]
    InvalidOrigin(String, url::ParseError),

    #[error("page origin '{0}' must use http or https")]
    UnsupportedOriginScheme(String),

    #[error("invalid due-date time {hour:02}:{minute:02}")]
    InvalidDueTime { hour: u32, minute: u32 },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
