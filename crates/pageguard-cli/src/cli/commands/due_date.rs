//! `pageguard due-date` – print the default due date for an empty field.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use pageguard_core::config::PageguardConfig;

pub fn run_due_date(cfg: &PageguardConfig, current: Option<&str>, now: Option<&str>) -> Result<()> {
    let policy = cfg.due_date_policy().context("due_date in config")?;
    let value = match now {
        Some(s) => {
            let now = DateTime::parse_from_rfc3339(s).with_context(|| format!("--now {s}"))?;
            policy.default_value(current, &now)
        }
        None => policy.default_value(current, &Local::now()),
    };
    if let Some(v) = value {
        println!("{v}");
    }
    Ok(())
}
