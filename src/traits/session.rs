//! Where a signed-in session is kept between runs.
//!
//! The live token and user travel in [`crate::auth::SessionContext`];
//! a [`SessionProvider`] only loads and stores a snapshot of it.

use async_trait::async_trait;

use crate::auth::Session;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to load session: {0}")]
    LoadFailed(String),
    #[error("Failed to save session: {0}")]
    SaveFailed(String),
    #[error("Failed to clear session: {0}")]
    ClearFailed(String),
    /// Stored JSON could not be read or written.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Load the stored session.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Store a session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove the stored session.
    async fn clear(&self) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        assert_eq!(
            SessionError::LoadFailed("read error".to_string()).to_string(),
            "Failed to load session: read error"
        );
        assert_eq!(
            SessionError::Serialization("bad json".to_string()).to_string(),
            "Serialization error: bad json"
        );
    }
}
