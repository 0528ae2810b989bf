//! Input validation
//!
//! Checks run before any directory operation loads or mutates a collection.

use super::role::GUEST_USERNAME;
use crate::error::ValidationError;

fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Validates a username for a new account.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if is_blank(username) {
        return Err(ValidationError::EmptyUsername);
    }

    if username.trim().eq_ignore_ascii_case(GUEST_USERNAME) {
        return Err(ValidationError::ReservedUsername(username.to_string()));
    }

    Ok(())
}

/// Validates a password and its confirmation.
pub fn validate_password_entry(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Validates that a required record field was supplied.
pub fn require_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}
