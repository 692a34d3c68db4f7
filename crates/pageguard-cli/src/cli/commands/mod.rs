//! CLI command handlers, one file per subcommand.

mod alerts;
mod confirm;
mod due_date;
mod escape;
mod sanitize_url;
mod validate;

pub use alerts::run_alerts;
pub use confirm::run_confirm;
pub use due_date::run_due_date;
pub use escape::run_escape;
pub use sanitize_url::run_sanitize_url;
pub use validate::run_validate;
