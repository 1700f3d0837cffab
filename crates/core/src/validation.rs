//! Shared form-field validation helpers.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Basic `local@domain.tld` shape check. Deliberately loose: the goal is to
/// reject obvious garbage, not to implement RFC 5322.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    });
    if re.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email format".to_string()))
    }
}

/// Require a non-empty (after trimming) value for a named field.
pub fn require_field(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
