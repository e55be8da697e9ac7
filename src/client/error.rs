use thiserror::Error;

use crate::error::{AuthError, MarkleeError, NetworkError};
use crate::traits::HttpError;

/// Errors raised by [`super::AdminClient`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// No token in the session; the request was never sent.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The request did not complete.
    #[error("Request failed: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but with `success: false`.
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// The body was not the expected envelope.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    /// The message an admin page shows in its error banner.
    pub fn ui_message(&self) -> String {
        match self {
            ClientError::Status { message, .. } | ClientError::Rejected { message }
                if !message.is_empty() =>
            {
                message.clone()
            }
            other => MarkleeError::from(other.clone()).user_message(),
        }
    }

    /// Check if this error means the session is no longer usable.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ClientError::NotAuthenticated | ClientError::Status { status: 401, .. }
        )
    }
}

impl From<ClientError> for MarkleeError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotAuthenticated => MarkleeError::Auth(AuthError::NotAuthenticated),
            ClientError::Transport(HttpError::ConnectionFailed(message)) => {
                MarkleeError::Network(NetworkError::ConnectionFailed {
                    url: String::new(),
                    message,
                })
            }
            ClientError::Transport(HttpError::Timeout(_)) => {
                MarkleeError::Network(NetworkError::Timeout {
                    operation: "HTTP".to_string(),
                })
            }
            ClientError::Transport(other) => MarkleeError::Network(NetworkError::Other {
                message: other.to_string(),
            }),
            ClientError::Status { status, message } => {
                MarkleeError::Network(NetworkError::HttpStatus { status, message })
            }
            ClientError::Rejected { message } => {
                MarkleeError::Network(NetworkError::HttpStatus {
                    status: 400,
                    message,
                })
            }
            ClientError::Decode(message) => {
                MarkleeError::Network(NetworkError::InvalidResponse { message })
            }
        }
    }
}
