use crate::error::PageguardError;
use crate::page::DueDatePolicy;
use crate::url_sanitize::OriginResolver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Alert auto-dismissal timing (optional `[alerts]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Milliseconds after page load before an alert starts fading.
    pub dismiss_after_ms: u64,
    /// Milliseconds between the fade and the alert's removal.
    pub fade_ms: u64,
    /// Alerts with this class are never dismissed.
    pub persistent_class: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
            fade_ms: 150,
            persistent_class: "alert-danger".to_string(),
        }
    }
}

/// Due-date default (optional `[due_date]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DueDateConfig {
    pub days_ahead: u64,
    pub hour: u32,
    pub minute: u32,
}

impl Default for DueDateConfig {
    fn default() -> Self {
        Self {
            days_ahead: 1,
            hour: 23,
            minute: 59,
        }
    }
}

/// Global configuration loaded from `~/.config/pageguard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageguardConfig {
    /// Origin relative URLs resolve against (e.g. `https://homework.example.com`).
    /// None = no page context; relative URLs other than root-relative paths are rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_origin: Option<String>,
    #[serde(default)]
    pub alerts: AlertConfig,
    #[serde(default)]
    pub due_date: DueDateConfig,
}

impl PageguardConfig {
    /// URL resolver for the configured origin, or a detached one when none is set.
    pub fn resolver(&self) -> Result<OriginResolver, PageguardError> {
        match &self.page_origin {
            Some(origin) => OriginResolver::with_origin(origin),
            None => Ok(OriginResolver::detached()),
        }
    }

    pub fn due_date_policy(&self) -> Result<DueDatePolicy, PageguardError> {
        DueDatePolicy::from_config(&self.due_date)
    }
}

pub fn config_path() -> Result<PathBuf, PageguardError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pageguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<PageguardConfig, PageguardError> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<PageguardConfig, PageguardError> {
    if !path.exists() {
        let default_cfg = PageguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: PageguardConfig = toml::from_str(&data)?;
    Ok(cfg)
}
