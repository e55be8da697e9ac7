//! Error types for the admin client, session storage and configuration.
//!
//! Each area has its own enum ([`NetworkError`], [`AuthError`],
//! [`ValidationErrors`], [`SystemError`]). [`MarkleeError`] wraps them and
//! maps each to an [`ErrorCategory`], which decides the hint text and
//! whether the console offers a retry.

mod auth;
mod category;
mod marklee_error;
mod network;
mod result;
mod system;
mod validation;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use marklee_error::MarkleeError;
pub use network::NetworkError;
pub use result::MarkleeResult;
pub use system::{classify_io_error, SystemError};
pub use validation::{FieldError, ValidationErrors};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_error_unification() {
        let errors: Vec<MarkleeError> = vec![
            NetworkError::Timeout {
                operation: "list users".to_string(),
            }
            .into(),
            AuthError::InvalidToken.into(),
            ValidationErrors::single("username", "too short").into(),
            SystemError::NoHomeDirectory.into(),
        ];

        for err in &errors {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
            assert!(!err.recovery_hint().is_empty());
        }

        assert_eq!(errors[0].category(), ErrorCategory::Network);
        assert_eq!(errors[1].category(), ErrorCategory::Auth);
        assert_eq!(errors[2].category(), ErrorCategory::User);
        assert_eq!(errors[3].category(), ErrorCategory::System);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: MarkleeError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
