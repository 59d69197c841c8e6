//! Input validation for contacts and labels.
//!
//! Handlers call these before touching the store so a request either passes
//! every check or fails without side effects.

use crate::error::CoreError;

/// Return the value of a required text field, rejecting absent, empty, or
/// whitespace-only input.
pub fn require_field<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Validate the three required contact fields together.
///
/// A single message names all three so the caller does not have to fix them
/// one at a time. No address-format check is applied to `email`.
pub fn validate_new_contact(
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<(), CoreError> {
    let all_present = [name, phone, email]
        .into_iter()
        .all(|v| v.is_some_and(|s| !s.trim().is_empty()));

    if !all_present {
        return Err(CoreError::Validation(
            "name, phone and email are required".to_string(),
        ));
    }
    Ok(())
}

/// Validate a list of label names supplied in a request body.
///
/// The list must be non-empty and every entry must be a non-empty name.
pub fn validate_label_names(names: &[String]) -> Result<(), CoreError> {
    if names.is_empty() {
        return Err(CoreError::Validation("labels must not be empty".to_string()));
    }
    if let Some(pos) = names.iter().position(|n| n.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "label name at position {pos} is empty"
        )));
    }
    Ok(())
}
