//! CLI for the pageguard sanitization utility.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pageguard_core::config::{self, PageguardConfig};

use commands::{
    run_alerts, run_confirm, run_due_date, run_escape, run_sanitize_url, run_validate,
};

/// Top-level CLI for pageguard.
#[derive(Debug, Parser)]
#[command(name = "pageguard")]
#[command(about = "pageguard: escape text and sanitize URLs for safe DOM insertion", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Escape text for insertion as HTML text content or attribute value.
    Escape {
        /// Untrusted text.
        text: String,
    },

    /// Sanitize a URL for use in an href/src attribute. Prints an empty line on rejection.
    SanitizeUrl {
        /// Untrusted URL candidate.
        url: String,
        /// Page origin relative URLs resolve against (overrides config).
        #[arg(long)]
        origin: Option<String>,
    },

    /// Print the default due date for a new assignment.
    DueDate {
        /// Current field value; nothing is printed when it is non-empty.
        #[arg(long)]
        current: Option<String>,
        /// Reference time (RFC 3339) instead of the local clock.
        #[arg(long, value_name = "RFC3339")]
        now: Option<String>,
    },

    /// Print the alert dismissal timeline as JSON.
    Alerts {
        /// Class list of each alert, space-separated (e.g. "alert alert-success").
        #[arg(required = true)]
        classes: Vec<String>,
    },

    /// Ask for confirmation on stdin and print whether the form would submit.
    Confirm {
        /// Confirmation message shown to the user.
        message: String,
    },

    /// Validate an assignment form field value. Exits non-zero when rejected.
    Validate {
        /// Field name (title, description, subject, priority, ...).
        field: String,
        /// Value to check.
        value: String,
        /// Reject empty or whitespace-only values.
        #[arg(long)]
        required: bool,
    },
}

impl CliCommand {
    /// Whether the subcommand reads `config.toml`. Others run without touching it.
    pub fn uses_config(&self) -> bool {
        matches!(
            self,
            CliCommand::SanitizeUrl { .. } | CliCommand::DueDate { .. } | CliCommand::Alerts { .. }
        )
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = if cli.command.uses_config() {
            let cfg = config::load_or_init().context("load config")?;
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        } else {
            PageguardConfig::default()
        };

        match cli.command {
            CliCommand::Escape { text } => run_escape(&text),
            CliCommand::SanitizeUrl { url, origin } => {
                run_sanitize_url(&cfg, &url, origin.as_deref())?
            }
            CliCommand::DueDate { current, now } => {
                run_due_date(&cfg, current.as_deref(), now.as_deref())?
            }
            CliCommand::Alerts { classes } => run_alerts(&cfg, &classes)?,
            CliCommand::Confirm { message } => run_confirm(&message)?,
            CliCommand::Validate {
                field,
                value,
                required,
            } => run_validate(&field, &value, required)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
