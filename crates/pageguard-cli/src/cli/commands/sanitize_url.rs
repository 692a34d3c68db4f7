//! `pageguard sanitize-url` – print the sanitized URL or an empty line.

use anyhow::{Context, Result};
use pageguard_core::config::PageguardConfig;
use pageguard_core::{sanitize_url, OriginResolver};

/// Resolver for this run: `--origin` wins over `page_origin` from the config.
pub(super) fn choose_resolver(
    cfg: &PageguardConfig,
    origin: Option<&str>,
) -> Result<OriginResolver> {
    match origin {
        Some(o) => OriginResolver::with_origin(o).context("--origin"),
        None => cfg.resolver().context("page_origin in config"),
    }
}

pub fn run_sanitize_url(cfg: &PageguardConfig, url: &str, origin: Option<&str>) -> Result<()> {
    let resolver = choose_resolver(cfg, origin)?;
    println!("{}", sanitize_url(&resolver, Some(url)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg_with_origin(origin: Option<&str>) -> PageguardConfig {
        PageguardConfig {
            page_origin: origin.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn flag_overrides_config_origin() {
        let cfg = cfg_with_origin(Some("https://config.example.com"));
        let r = choose_resolver(&cfg, Some("https://flag.example.com")).unwrap();
        assert_eq!(r.origin().unwrap().as_str(), "https://flag.example.com/");
        assert_eq!(
            sanitize_url(&r, Some("assignments/1")),
            "https://flag.example.com/assignments/1"
        );
    }

    #[test]
    fn config_origin_used_without_flag() {
        let cfg = cfg_with_origin(Some("https://config.example.com"));
        let r = choose_resolver(&cfg, None).unwrap();
        assert_eq!(r.origin().unwrap().as_str(), "https://config.example.com/");
    }

    #[test]
    fn no_origin_anywhere_is_detached() {
        let r = choose_resolver(&cfg_with_origin(None), None).unwrap();
        assert!(r.origin().is_none());
    }

    #[test]
    fn valid_flag_bypasses_broken_config_origin() {
        let cfg = cfg_with_origin(Some("javascript:alert(1)"));
        assert!(choose_resolver(&cfg, None).is_err());
        assert!(choose_resolver(&cfg, Some("http://localhost:8080")).is_ok());
    }

    #[test]
    fn invalid_flag_is_an_error() {
        let cfg = cfg_with_origin(Some("https://config.example.com"));
        let err = choose_resolver(&cfg, Some("ftp://files.example.com")).unwrap_err();
        assert!(format!("{err:#}").contains("--origin"));
    }
}
