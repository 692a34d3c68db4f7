//! Form input validation for assignment fields.
//!
//! Rejects values that are too long, carry control characters, or look like
//! script, SQL, path-traversal or shell-injection payloads. Checks run in that
//! order and the first failure is reported.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Field that may hold free-form multi-line text; exempt from the control-character check.
pub const DESCRIPTION_FIELD: &str = "description";

/// Maximum length in bytes per known field. Unknown fields have no limit.
pub fn max_length(field: &str) -> Option<usize> {
    match field {
        "title" => Some(200),
        "description" => Some(5000),
        "subject" => Some(100),
        "priority" => Some(20),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("this field is required")]
    Required,
    #[error("must be at most {max} bytes")]
    TooLong { max: usize },
    #[error("contains invalid control characters")]
    ControlCharacter,
    #[error("contains potentially dangerous HTML or script")]
    Xss,
    #[error("contains potentially dangerous SQL syntax")]
    SqlInjection,
    #[error("contains an invalid path sequence")]
    PathTraversal,
    #[error("contains potentially dangerous command syntax")]
    CommandInjection,
}

/// A rejected field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn new(field: &str, kind: ValidationErrorKind) -> Self {
        Self {
            field: field.to_string(),
            kind,
        }
    }

    /// Human-readable reason, without the field name.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("built-in validation pattern must compile"))
        .collect()
}

// `(?-u:\w)` keeps word matching ASCII-only so Japanese text after `;` or `|` is not flagged.
static XSS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)<\s*script",
        r"(?i)</\s*script",
        r"(?i)javascript\s*:",
        r"(?i)on(?-u:\w)+\s*=",
        r"(?i)<\s*iframe",
        r"(?i)<\s*object",
        r"(?i)<\s*embed",
        r"(?i)<\s*svg[^>]*on(?-u:\w)+\s*=",
        r"(?i)data\s*:\s*text/html",
        r"(?i)<\s*img[^>]*on(?-u:\w)+\s*=",
        r"(?i)expression\s*\(",
        r"(?i)alert\s*\(",
        r"(?i)confirm\s*\(",
        r"(?i)prompt\s*\(",
        r"(?i)document\s*\.\s*cookie",
        r"(?i)document\s*\.\s*location",
        r"(?i)window\s*\.\s*location",
    ])
});

static SQL_INJECTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)'\s*or\s+",
        r"(?i)'\s*and\s+",
        r#"(?i)"\s*or\s+"#,
        r#"(?i)"\s*and\s+"#,
        r"(?i)union\s+(all\s+)?select",
        r"(?i);\s*(drop|delete|update|insert|alter|truncate)\s+",
        r"(?i)--\s*$",
        r"(?i)/\*.*\*/",
        r"(?i)'\s*;\s*",
        r"(?i)exec\s*\(",
        r"(?i)xp_(?-u:\w)+",
        r"(?i)load_file\s*\(",
        r"(?i)into\s+(out|dump)file",
        r"(?i)benchmark\s*\(",
        r"(?i)sleep\s*\(\s*\d",
        r"(?i)waitfor\s+delay",
        r"(?i)1\s*=\s*1",
        r"(?i)'1'\s*=\s*'1",
    ])
});

static PATH_TRAVERSAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\.\.[\\/]",
        r"\.\.%2[fF]",
        r"%2e%2e[\\/]",
        r"\.\./",
        r"\.\.\\",
    ])
});

static COMMAND_INJECTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"^\s*;",
        r";\s*(?-u:\w)+",
        r"\|\s*(?-u:\w)+",
        r"`[^`]+`",
        r"\$\([^)]+\)",
        r"&&\s*(?-u:\w)+",
        r"\|\|\s*(?-u:\w)+",
    ])
});

fn matches_any(patterns: &[Regex], value: &str) -> bool {
    patterns.iter().any(|p| p.is_match(value))
}

fn has_forbidden_control(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t'))
}

/// Validates one field value.
///
/// An empty optional field is always valid. A required field must contain
/// something besides whitespace.
pub fn validate_field(field: &str, value: &str, required: bool) -> Result<(), ValidationError> {
    use ValidationErrorKind::*;

    if required && value.trim().is_empty() {
        return Err(ValidationError::new(field, Required));
    }
    if value.is_empty() {
        return Ok(());
    }

    if let Some(max) = max_length(field) {
        if value.len() > max {
            return Err(ValidationError::new(field, TooLong { max }));
        }
    }

    if field != DESCRIPTION_FIELD && has_forbidden_control(value) {
        return Err(ValidationError::new(field, ControlCharacter));
    }

    let families: [(&Lazy<Vec<Regex>>, ValidationErrorKind); 4] = [
        (&XSS_PATTERNS, Xss),
        (&SQL_INJECTION_PATTERNS, SqlInjection),
        (&PATH_TRAVERSAL_PATTERNS, PathTraversal),
        (&COMMAND_INJECTION_PATTERNS, CommandInjection),
    ];
    for (patterns, kind) in families {
        if matches_any(patterns, value) {
            tracing::debug!(field, %kind, "rejected field value");
            return Err(ValidationError::new(field, kind));
        }
    }

    Ok(())
}

/// The user-editable fields of an assignment form.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub subject: &'a str,
    pub priority: &'a str,
}

/// Validates an assignment form. Only the title is required.
pub fn validate_assignment_input(input: &AssignmentInput<'_>) -> Result<(), ValidationError> {
    validate_field("title", input.title, true)?;
    validate_field("description", input.description, false)?;
    validate_field("subject", input.subject, false)?;
    validate_field("priority", input.priority, false)?;
    Ok(())
}

/// Removes NUL characters and trims surrounding whitespace.
pub fn sanitize_string(s: &str) -> String {
    s.replace('\0', "").trim().to_string()
}
