//! `pageguard confirm` – prompt on stdin and report the submit decision.

use anyhow::Result;
use pageguard_core::page::{guard_submit, Confirmer, SubmitDecision};
use std::io::{self, BufRead, Write};

/// Reads a yes/no answer from stdin; anything but `y`/`yes` refuses.
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_yes(&line)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn run_confirm(message: &str) -> Result<()> {
    match guard_submit(Some(message), &mut StdinConfirmer) {
        SubmitDecision::Proceed => println!("proceed"),
        SubmitDecision::Cancelled => println!("cancelled"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
