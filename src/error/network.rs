//! Failures talking to the REST backend.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("{operation} timed out")]
    Timeout { operation: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} error: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body was not the expected JSON envelope.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Whether offering "try again" makes sense. 429 and 5xx count.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Banner text for the admin console. A 400 shows the server's own message.
    pub fn user_message(&self) -> String {
        let text = match self {
            Self::ConnectionFailed { .. } => {
                "Unable to connect to the server. Please check your internet connection."
            }
            Self::Timeout { operation } => {
                return format!("The {operation} request timed out. Please try again.")
            }
            Self::HttpStatus { status, message } => match *status {
                400 if !message.is_empty() => return message.clone(),
                400 => "The request was invalid. Please try again.",
                401 => "Authentication required. Please sign in again.",
                403 => "Access denied. You don't have permission for this action.",
                404 => "The requested resource was not found.",
                500..=599 => "The server is experiencing issues. Please try again later.",
                other => {
                    return format!("The server returned an error (HTTP {other}). Please try again.")
                }
            },
            Self::InvalidResponse { .. } => {
                "Received an invalid response from the server. Please try again."
            }
            Self::Other { message } => return format!("Network error: {message}"),
        };
        text.to_string()
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionFailed { .. } => "E_NET_CONN",
            Self::Timeout { .. } => "E_NET_TIMEOUT",
            Self::HttpStatus { .. } => "E_NET_HTTP",
            Self::InvalidResponse { .. } => "E_NET_INVALID",
            Self::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_connect() {
            let url = err.url().map_or_else(|| "unknown".to_string(), |u| u.to_string());
            Self::ConnectionFailed { url, message }
        } else if err.is_timeout() {
            Self::Timeout {
                operation: "HTTP".to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                status: status.as_u16(),
                message,
            }
        } else if err.is_decode() {
            Self::InvalidResponse { message }
        } else {
            Self::Other { message }
        }
    }
}
