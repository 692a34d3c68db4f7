//! Alert auto-dismissal: fade every non-persistent alert, then detach it.
//!
//! The dismisser only builds a timeline; the caller's event loop advances it
//! with the elapsed time since page load.

use crate::config::AlertConfig;
use serde::Serialize;
use std::time::Duration;

/// Class added to an alert when it starts fading out.
pub const FADE_CLASS: &str = "fade";

/// An alert element on the page.
pub trait AlertNode {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn detach(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissStep {
    Fade,
    Remove,
}

/// One scheduled change to the alert at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DismissAction {
    pub index: usize,
    #[serde(rename = "at_ms", serialize_with = "serialize_millis")]
    pub at: Duration,
    pub step: DismissStep,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[derive(Debug, Clone)]
pub struct AlertDismisser {
    dismiss_after: Duration,
    fade: Duration,
    persistent_class: String,
}

impl AlertDismisser {
    pub fn new(cfg: &AlertConfig) -> Self {
        Self {
            dismiss_after: Duration::from_millis(cfg.dismiss_after_ms),
            fade: Duration::from_millis(cfg.fade_ms),
            persistent_class: cfg.persistent_class.clone(),
        }
    }

    /// Builds the timeline for `alerts`. Alerts carrying the persistent class get no actions.
    pub fn schedule<N: AlertNode>(&self, alerts: &[N]) -> DismissTimeline {
        let mut actions = Vec::new();
        for (index, alert) in alerts.iter().enumerate() {
            if alert.has_class(&self.persistent_class) {
                continue;
            }
            actions.push(DismissAction {
                index,
                at: self.dismiss_after,
                step: DismissStep::Fade,
            });
            actions.push(DismissAction {
                index,
                at: self.dismiss_after + self.fade,
                step: DismissStep::Remove,
            });
        }
        actions.sort_by_key(|a| (a.at, a.index));
        tracing::debug!(
            alerts = alerts.len(),
            actions = actions.len(),
            "scheduled alert dismissal"
        );
        DismissTimeline { actions, next: 0 }
    }
}

impl Default for AlertDismisser {
    fn default() -> Self {
        Self::new(&AlertConfig::default())
    }
}

/// Ordered dismissal actions plus a cursor over those already applied.
#[derive(Debug, Clone)]
pub struct DismissTimeline {
    actions: Vec<DismissAction>,
    next: usize,
}

impl DismissTimeline {
    pub fn actions(&self) -> &[DismissAction] {
        &self.actions
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.actions.len()
    }

    /// Time at which the next pending action is due.
    pub fn next_due(&self) -> Option<Duration> {
        self.actions.get(self.next).map(|a| a.at)
    }

    /// Applies every pending action due at or before `elapsed`. Returns the number applied.
    pub fn advance<N: AlertNode>(&mut self, alerts: &mut [N], elapsed: Duration) -> usize {
        let mut applied = 0;
        while let Some(&action) = self.actions.get(self.next) {
            if action.at > elapsed {
                break;
            }
            self.next += 1;
            let Some(alert) = alerts.get_mut(action.index) else {
                tracing::debug!(index = action.index, "alert vanished before dismissal");
                continue;
            };
            match action.step {
                DismissStep::Fade => alert.add_class(FADE_CLASS),
                DismissStep::Remove => alert.detach(),
            }
            applied += 1;
        }
        applied
    }
}
