//! Input validation.
//!
//! Secret names follow GitHub's naming rules.

use crate::error::{Result, ValidationError};

/// Prefix GitHub reserves for its own secrets.
const RESERVED_PREFIX: &str = "GITHUB_";

/// Validate a secret name.
///
/// Secret names:
/// - Cannot be empty
/// - Only contain A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the `GITHUB_` prefix
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    let invalid = |reason: String| ValidationError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("cannot start with a digit".to_string()).into());
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(invalid(format!(
            "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
            ch,
            i + 1
        ))
        .into());
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_PREFIX) {
        return Err(invalid(format!("cannot start with {}", RESERVED_PREFIX)).into());
    }

    Ok(())
}
