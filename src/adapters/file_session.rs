//! File-based session provider adapter.

use async_trait::async_trait;

use crate::auth::{Session, SessionStore};
use crate::error::{AuthError, MarkleeError};
use crate::traits::{SessionError, SessionProvider};

/// File-based session provider.
///
/// Wraps [`SessionStore`]; the session lives in `~/.marklee/session.json`
/// unless built with [`FileSessionProvider::at`].
#[derive(Debug, Clone)]
pub struct FileSessionProvider {
    store: SessionStore,
}

impl FileSessionProvider {
    /// Create a provider backed by the default session file.
    pub fn new() -> Result<Self, SessionError> {
        SessionStore::new()
            .map(|store| Self { store })
            .map_err(|e| SessionError::LoadFailed(e.user_message()))
    }

    /// Create a provider backed by an explicit file.
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            store: SessionStore::at(path),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

#[async_trait]
impl SessionProvider for FileSessionProvider {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        let session = self.store.load().map_err(|e| match e {
            MarkleeError::Auth(AuthError::SessionStorage { message }) => {
                SessionError::Serialization(message)
            }
            other => SessionError::LoadFailed(other.to_string()),
        })?;

        if session.is_empty() {
            Ok(None)
        } else {
            Ok(Some(session))
        }
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.store
            .save(session)
            .map_err(|e| SessionError::SaveFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.store
            .clear()
            .map_err(|e| SessionError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_file_loads_none() {
        let dir = TempDir::new().unwrap();
        let provider = FileSessionProvider::at(dir.path().join("session.json"));
        assert_eq!(provider.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "garbage").unwrap();
        let provider = FileSessionProvider::at(path);
        assert!(matches!(
            provider.load().await,
            Err(SessionError::Serialization(_))
        ));
    }
}
