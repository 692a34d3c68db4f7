//! Config file creation and reload under a temporary directory.

use pageguard_core::config::{load_or_init_at, PageguardConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let cfg = load_or_init_at(&path).unwrap();
    assert_eq!(cfg, PageguardConfig::default());
    assert!(path.exists());

    let reloaded = load_or_init_at(&path).unwrap();
    assert_eq!(reloaded, cfg);
}

#[test]
fn existing_file_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "page_origin = \"https://homework.example.com\"\n[alerts]\nfade_ms = 300\n",
    )
    .unwrap();

    let cfg = load_or_init_at(&path).unwrap();
    assert_eq!(cfg.page_origin.as_deref(), Some("https://homework.example.com"));
    assert_eq!(cfg.alerts.fade_ms, 300);
    assert_eq!(cfg.alerts.dismiss_after_ms, 5000);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "page_origin = [not toml").unwrap();
    assert!(load_or_init_at(&path).is_err());
}
