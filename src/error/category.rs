//! Coarse error buckets. The admin console picks its hint text and whether
//! to show a retry button from these.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS, timeouts.
    Network,
    /// Missing or expired session.
    Auth,
    /// 5xx from the backend.
    Server,
    /// Response shapes the client did not expect.
    Client,
    /// Bad input or a forbidden action.
    User,
    /// Filesystem.
    System,
    /// Unusable environment values.
    Configuration,
}

impl ErrorCategory {
    const ALL: [ErrorCategory; 7] = [
        Self::Network,
        Self::Auth,
        Self::Server,
        Self::Client,
        Self::User,
        Self::System,
        Self::Configuration,
    ];

    /// Transient failures. Nothing retries on its own; this only gates the
    /// retry button.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network | Self::Server)
    }

    pub fn as_str(&self) -> &'static str {
        self.describe().0
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.describe().1
    }

    fn describe(&self) -> (&'static str, &'static str) {
        match self {
            Self::Network => ("network", "Check your internet connection and try again"),
            Self::Auth => ("auth", "Try signing out and signing back in"),
            Self::Server => (
                "server",
                "The server may be experiencing issues. Please try again later",
            ),
            Self::Client => (
                "client",
                "This may be a bug. Please report this issue if it persists",
            ),
            Self::User => ("user", "Please check your input and try again"),
            Self::System => ("system", "Check file permissions and available disk space"),
            Self::Configuration => ("configuration", "Check your MARKLEE_* environment variables"),
        }
    }

    /// Inverse of [`ErrorCategory::as_str`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_network_and_server_are_retryable() {
        let retryable: Vec<_> = ErrorCategory::ALL
            .into_iter()
            .filter(ErrorCategory::is_retryable)
            .collect();
        assert_eq!(retryable, vec![ErrorCategory::Network, ErrorCategory::Server]);
    }

    #[test]
    fn test_labels_round_trip() {
        for category in ErrorCategory::ALL {
            assert_eq!(ErrorCategory::from_label(&category.to_string()), Some(category));
        }
        assert_eq!(ErrorCategory::from_label("fatal"), None);
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Auth.recovery_hint().contains("signing"));
        assert!(ErrorCategory::User.recovery_hint().contains("input"));
        assert!(ErrorCategory::Configuration.recovery_hint().contains("MARKLEE_"));
    }
}
