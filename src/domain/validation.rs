//! Form field validators.
//!
//! The same predicates back the sign-up form and the registration endpoint.
//! No normalization is applied: callers trim input themselves if they want to.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FieldError, ValidationErrors};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum username length, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern"));

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid username regex pattern"));

/// Check that an email has a `local@domain.tld` shape.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check that a password is at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Check that a username is at least [`MIN_USERNAME_LEN`] ASCII alphanumerics.
pub fn validate_username(username: &str) -> bool {
    username.chars().count() >= MIN_USERNAME_LEN && USERNAME_REGEX.is_match(username)
}

/// Validate all sign-up fields at once, collecting every failure.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !validate_username(username) {
        errors.push(FieldError::new(
            "username",
            format!(
                "Username must be at least {} characters and contain only letters and numbers",
                MIN_USERNAME_LEN
            ),
        ));
    }
    if !validate_email(email) {
        errors.push(FieldError::new("email", "Please enter a valid email address"));
    }
    if !validate_password(password) {
        errors.push(FieldError::new(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    errors.into_result()
}
