//! Unified error type for Marklee.

use thiserror::Error;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::network::NetworkError;
use super::system::SystemError;
use super::validation::ValidationErrors;

/// One error type shared by the server and the admin client so both
/// categorize and word failures the same way.
#[derive(Debug, Error)]
pub enum MarkleeError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    System(#[from] SystemError),
}

impl MarkleeError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            MarkleeError::Network(NetworkError::HttpStatus { status, .. }) if *status >= 500 => {
                ErrorCategory::Server
            }
            MarkleeError::Network(NetworkError::HttpStatus { status: 401 | 403, .. }) => {
                ErrorCategory::Auth
            }
            MarkleeError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Client,
            MarkleeError::Network(_) => ErrorCategory::Network,
            MarkleeError::Auth(err) => {
                if err.requires_reauth() {
                    ErrorCategory::Auth
                } else {
                    ErrorCategory::User
                }
            }
            MarkleeError::Validation(_) => ErrorCategory::User,
            MarkleeError::System(SystemError::EnvironmentError { .. }) => {
                ErrorCategory::Configuration
            }
            MarkleeError::System(_) => ErrorCategory::System,
        }
    }

    /// Check if this error is worth offering a retry for.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarkleeError::Network(err) => err.is_retryable(),
            MarkleeError::Auth(_) | MarkleeError::Validation(_) | MarkleeError::System(_) => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            MarkleeError::Network(err) => err.user_message(),
            MarkleeError::Auth(err) => err.user_message(),
            MarkleeError::Validation(err) => err
                .first_message()
                .unwrap_or("Please check your input and try again")
                .to_string(),
            MarkleeError::System(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            MarkleeError::Network(err) => err.error_code(),
            MarkleeError::Auth(err) => err.error_code(),
            MarkleeError::Validation(_) => "E_VALIDATION",
            MarkleeError::System(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Check if this error requires signing in again.
    pub fn requires_reauth(&self) -> bool {
        match self {
            MarkleeError::Auth(err) => err.requires_reauth(),
            MarkleeError::Network(NetworkError::HttpStatus { status: 401, .. }) => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for MarkleeError {
    fn from(err: std::io::Error) -> Self {
        MarkleeError::System(super::system::classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for MarkleeError {
    fn from(err: serde_json::Error) -> Self {
        MarkleeError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

impl From<reqwest::Error> for MarkleeError {
    fn from(err: reqwest::Error) -> Self {
        MarkleeError::Network(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_categories() {
        let server: MarkleeError = NetworkError::HttpStatus {
            status: 502,
            message: String::new(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);
        assert!(server.is_retryable());

        let forbidden: MarkleeError = NetworkError::HttpStatus {
            status: 403,
            message: String::new(),
        }
        .into();
        assert_eq!(forbidden.category(), ErrorCategory::Auth);
        assert!(!forbidden.requires_reauth());
    }

    #[test]
    fn test_auth_categories() {
        let err: MarkleeError = AuthError::NotAuthenticated.into();
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert!(err.requires_reauth());

        let err: MarkleeError = AuthError::InvalidCredentials.into();
        assert_eq!(err.category(), ErrorCategory::User);
    }

    #[test]
    fn test_validation_user_message() {
        let err: MarkleeError = ValidationErrors::single("email", "Please enter a valid email address").into();
        assert_eq!(err.user_message(), "Please enter a valid email address");
        assert_eq!(err.error_code(), "E_VALIDATION");
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_environment_error_is_configuration() {
        let err: MarkleeError = SystemError::EnvironmentError {
            variable: "MARKLEE_PORT".to_string(),
            message: "not a number".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: MarkleeError = json_err.into();
        assert!(matches!(
            err,
            MarkleeError::Network(NetworkError::InvalidResponse { .. })
        ));
    }
}
