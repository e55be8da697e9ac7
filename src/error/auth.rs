//! Session and permission failures.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// No token in the session context.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Bearer token missing, unknown or revoked server-side.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied{}", .resource.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    AccessDenied { resource: Option<String> },

    #[error("Session storage error: {message}")]
    SessionStorage { message: String },
}

impl AuthError {
    /// True when signing in again is the fix.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidToken)
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthenticated => "You are not signed in. Please sign in to continue.".into(),
            Self::InvalidToken => "Your session has expired. Please sign in again.".into(),
            Self::InvalidCredentials => "Invalid email or password.".into(),
            Self::AccessDenied {
                resource: Some(resource),
            } => format!("Access denied to {resource}."),
            Self::AccessDenied { resource: None } => {
                "Access denied. You don't have permission for this action.".into()
            }
            Self::SessionStorage { .. } => {
                "Could not save your session. Please check file permissions.".into()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotAuthenticated => "E_AUTH_NOT_AUTH",
            Self::InvalidToken => "E_AUTH_TOKEN",
            Self::InvalidCredentials => "E_AUTH_INVALID",
            Self::AccessDenied { .. } => "E_AUTH_ACCESS",
            Self::SessionStorage { .. } => "E_AUTH_SESSION",
        }
    }
}
