//! `pageguard alerts` – print the dismissal timeline for a set of alerts.

use anyhow::Result;
use pageguard_core::config::PageguardConfig;
use pageguard_core::page::{AlertDismisser, AlertNode};

/// Alert described only by its class list.
struct ClassList(Vec<String>);

impl AlertNode for ClassList {
    fn has_class(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        self.0.push(class.to_string());
    }

    fn detach(&mut self) {}
}

pub fn run_alerts(cfg: &PageguardConfig, classes: &[String]) -> Result<()> {
    let alerts: Vec<ClassList> = classes
        .iter()
        .map(|c| ClassList(c.split_whitespace().map(str::to_string).collect()))
        .collect();
    let timeline = AlertDismisser::new(&cfg.alerts).schedule(&alerts);
    println!("{}", serde_json::to_string_pretty(timeline.actions())?);
    Ok(())
}
