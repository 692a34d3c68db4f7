//! Confirmation gate for destructive form submissions.

/// Asks the user a yes/no question.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Cancelled,
}

/// Decides whether a form submission goes ahead.
///
/// Forms without a confirmation message are not intercepted. Otherwise the
/// confirmer is asked exactly once and a refusal cancels the submission.
pub fn guard_submit<C: Confirmer + ?Sized>(
    confirm_message: Option<&str>,
    confirmer: &mut C,
) -> SubmitDecision {
    let Some(message) = confirm_message else {
        return SubmitDecision::Proceed;
    };
    if confirmer.confirm(message) {
        SubmitDecision::Proceed
    } else {
        tracing::debug!(confirm_message = message, "form submission cancelled by user");
        SubmitDecision::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        answer: bool,
        asked: Vec<String>,
    }

    impl Confirmer for Scripted {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.answer
        }
    }

    #[test]
    fn no_message_never_prompts() {
        let mut c = Scripted {
            answer: false,
            asked: Vec::new(),
        };
        assert_eq!(guard_submit(None, &mut c), SubmitDecision::Proceed);
        assert!(c.asked.is_empty());
    }

    #[test]
    fn accepted() {
        let mut c = Scripted {
            answer: true,
            asked: Vec::new(),
        };
        assert_eq!(
            guard_submit(Some("Delete this assignment?"), &mut c),
            SubmitDecision::Proceed
        );
        assert_eq!(c.asked, vec!["Delete this assignment?".to_string()]);
    }

    #[test]
    fn refused() {
        let mut c = Scripted {
            answer: false,
            asked: Vec::new(),
        };
        assert_eq!(
            guard_submit(Some("Delete this user?"), &mut c),
            SubmitDecision::Cancelled
        );
        assert_eq!(c.asked.len(), 1);
    }

    #[test]
    fn empty_message_still_prompts() {
        let mut c = Scripted {
            answer: false,
            asked: Vec::new(),
        };
        assert_eq!(guard_submit(Some(""), &mut c), SubmitDecision::Cancelled);
        assert_eq!(c.asked, vec![String::new()]);
    }
}
