//! Client session state.
//!
//! [`Session`] is the persisted record (token plus user summary) and
//! [`SessionContext`] is the shared handle components receive instead of
//! reading storage directly.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::route_guard::{decide_for_role, GuardDecision, HOME_PATH};
use crate::domain::Role;
use crate::error::{classify_io_error, AuthError, MarkleeError, MarkleeResult, SystemError};
use crate::models::{LoginResponse, User};
use crate::traits::{SessionError, SessionProvider};

/// The session directory name.
const SESSION_DIR: &str = ".marklee";

/// The session file name.
const SESSION_FILE: &str = "session.json";

/// The part of the signed-in user the client keeps around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Persisted session: bearer token and the user it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    /// Build a session from a login response.
    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            token: Some(login.token.clone()),
            user: Some(SessionUser::from(&login.user)),
        }
    }

    /// Check whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// Shared, typed access to the current session.
///
/// Cloning is cheap and every clone sees the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Session>>,
}

impl SessionContext {
    /// Create an empty (signed-out) context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context holding `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the whole session.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    /// Replace the session.
    pub fn set(&self, session: Session) {
        *self.write() = session;
    }

    /// Sign out locally.
    pub fn clear(&self) {
        *self.write() = Session::default();
    }

    /// Bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Signed-in user, if any.
    pub fn user(&self) -> Option<SessionUser> {
        self.read().user.clone()
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.read().user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|role| role.is_admin())
    }

    /// JSON payload for the `user` cookie read by the route guard.
    pub fn role_claim_json(&self) -> Option<String> {
        let role = self.role()?;
        Some(serde_json::json!({ "role": role }).to_string())
    }

    /// Client-side access check, using the same table as the middleware.
    pub fn can_access(&self, path: &str) -> GuardDecision {
        match self.role() {
            Some(role) => decide_for_role(path, role),
            None => GuardDecision::RedirectTo(HOME_PATH.to_string()),
        }
    }

    /// Load the stored session into this context.
    ///
    /// Returns whether a session was found.
    pub async fn restore<P: SessionProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<bool, SessionError> {
        match provider.load().await? {
            Some(session) => {
                self.set(session);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the current session to storage.
    pub async fn persist<P: SessionProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<(), SessionError> {
        let session = self.snapshot();
        if session.is_empty() {
            provider.clear().await
        } else {
            provider.save(&session).await
        }
    }
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Path to the session file.
    session_path: PathBuf,
}

impl SessionStore {
    /// Create a store at `~/.marklee/session.json`.
    pub fn new() -> MarkleeResult<Self> {
        let home = dirs::home_dir().ok_or(SystemError::NoHomeDirectory)?;
        Ok(Self {
            session_path: home.join(SESSION_DIR).join(SESSION_FILE),
        })
    }

    /// Create a store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: path.into(),
        }
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    fn io_error(&self, operation: &str) -> impl FnOnce(std::io::Error) -> MarkleeError + '_ {
        let operation = operation.to_string();
        move |err| classify_io_error(err, Some(self.session_path.clone()), &operation).into()
    }

    /// Load the session file.
    ///
    /// A missing file is an empty session; an unparsable one is
    /// [`AuthError::SessionStorage`].
    pub fn load(&self) -> MarkleeResult<Session> {
        if !self.session_path.exists() {
            return Ok(Session::default());
        }

        let file = File::open(&self.session_path).map_err(self.io_error("read"))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            AuthError::SessionStorage {
                message: format!("{}: {}", self.session_path.display(), e),
            }
            .into()
        })
    }

    /// Save the session file, creating the parent directory if needed.
    pub fn save(&self, session: &Session) -> MarkleeResult<()> {
        if let Some(parent) = self.session_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(self.io_error("create"))?;
            }
        }

        let file = File::create(&self.session_path).map_err(self.io_error("write"))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session).map_err(|e| AuthError::SessionStorage {
            message: e.to_string(),
        })?;
        writer.flush().map_err(self.io_error("write"))
    }

    /// Remove the session file if present.
    pub fn clear(&self) -> MarkleeResult<()> {
        if !self.session_path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.session_path).map_err(self.io_error("remove"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn admin_session() -> Session {
        Session {
            token: Some("tok-1".to_string()),
            user: Some(SessionUser {
                id: Uuid::nil(),
                username: "root".to_string(),
                email: "root@marklee.io".to_string(),
                role: Role::Admin,
            }),
        }
    }

    #[test]
    fn test_empty_context() {
        let ctx = SessionContext::new();
        assert!(!ctx.is_authenticated());
        assert!(!ctx.is_admin());
        assert_eq!(ctx.role_claim_json(), None);
        assert_eq!(
            ctx.can_access("/dashboard"),
            GuardDecision::RedirectTo("/".to_string())
        );
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = SessionContext::new();
        let other = ctx.clone();
        ctx.set(admin_session());
        assert_eq!(other.token(), Some("tok-1".to_string()));
        other.clear();
        assert!(ctx.token().is_none());
    }

    #[test]
    fn test_role_claim_matches_guard() {
        let ctx = SessionContext::with_session(admin_session());
        let claim = ctx.role_claim_json().unwrap();
        assert_eq!(claim, r#"{"role":"admin"}"#);
        assert_eq!(
            crate::domain::decide("/dashboard", Some(&claim)),
            ctx.can_access("/dashboard")
        );
    }

    #[test]
    fn test_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), Session::default());
        store.save(&admin_session()).unwrap();
        assert_eq!(store.load().unwrap(), admin_session());
        store.clear().unwrap();
        assert!(!store.session_path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_store_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let err = SessionStore::at(&path).load().unwrap_err();
        assert!(matches!(
            err,
            MarkleeError::Auth(AuthError::SessionStorage { .. })
        ));
        assert_eq!(err.error_code(), "E_AUTH_SESSION");
    }

    #[test]
    fn test_store_unwritable_path_is_system_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        // The parent "directory" is a regular file.
        let err = SessionStore::at(blocker.join("session.json"))
            .save(&admin_session())
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::System);
    }
}
