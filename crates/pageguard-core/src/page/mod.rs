//! Page behaviors run once the document is ready: alert dismissal,
//! confirm-before-submit, and the due-date default.

pub mod alerts;
pub mod confirm;
pub mod due_date;

pub use alerts::{AlertDismisser, AlertNode, DismissAction, DismissStep, DismissTimeline};
pub use confirm::{guard_submit, Confirmer, SubmitDecision};
pub use due_date::DueDatePolicy;
