//! Session storage that lives only as long as the test.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::Session;
use crate::traits::{SessionError, SessionProvider};

#[derive(Debug, Default)]
struct Slot {
    session: Option<Session>,
    fail_saves: bool,
}

/// [`SessionProvider`] over a shared slot. Clones see the same slot.
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    slot: Arc<Mutex<Slot>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let provider = Self::new();
        provider.slot().session = Some(session);
        provider
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every later `save` return [`SessionError::SaveFailed`].
    pub fn set_save_should_fail(&self, should_fail: bool) {
        self.slot().fail_saves = should_fail;
    }

    pub fn stored(&self) -> Option<Session> {
        self.slot().session.clone()
    }
}

#[async_trait]
impl SessionProvider for InMemorySession {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self.stored())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut slot = self.slot();
        if slot.fail_saves {
            return Err(SessionError::SaveFailed("storage unavailable".to_string()));
        }
        slot.session = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.slot().session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionContext;

    #[tokio::test]
    async fn test_context_persist_and_restore() {
        let provider = InMemorySession::new();
        let ctx = SessionContext::with_session(Session {
            token: Some("abc".to_string()),
            user: None,
        });
        ctx.persist(&provider).await.unwrap();
        assert_eq!(provider.stored().unwrap().token, Some("abc".to_string()));

        let restored = SessionContext::new();
        assert!(restored.restore(&provider).await.unwrap());
        assert_eq!(restored.token(), Some("abc".to_string()));
    }

    #[tokio::test]
    async fn test_persist_empty_clears() {
        let provider = InMemorySession::with_session(Session {
            token: Some("old".to_string()),
            user: None,
        });
        SessionContext::new().persist(&provider).await.unwrap();
        assert!(provider.stored().is_none());
    }

    #[tokio::test]
    async fn test_save_failure() {
        let provider = InMemorySession::new();
        provider.set_save_should_fail(true);
        let ctx = SessionContext::with_session(Session {
            token: Some("abc".to_string()),
            user: None,
        });
        assert!(matches!(
            ctx.persist(&provider).await,
            Err(SessionError::SaveFailed(_))
        ));
    }
}
