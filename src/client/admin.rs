//! Typed client for the Marklee REST API.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::error::ClientError;
use crate::auth::{Session, SessionContext, SessionUser};
use crate::models::{
    ApiEnvelope, BriefQuestion, CreateBriefQuestion, LoginRequest, LoginResponse,
    RegisterRequest, User, UsersPage,
};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the auth and admin endpoints.
///
/// Each call makes exactly one request. Authenticated calls take the bearer
/// token from the injected [`SessionContext`] and fail fast with
/// [`ClientError::NotAuthenticated`] when there is none.
pub struct AdminClient<C: HttpClient> {
    http: C,
    base_url: String,
    session: SessionContext,
}

impl<C: HttpClient> AdminClient<C> {
    /// Create a client for the API at `base_url`.
    pub fn new(http: C, base_url: impl Into<String>, session: SessionContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn auth_headers(&self) -> Result<Headers, ClientError> {
        let token = self.session.token().ok_or(ClientError::NotAuthenticated)?;
        let mut headers = Self::json_headers();
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        Ok(headers)
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ClientError> {
        serde_json::to_string(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Unwrap the `{success, data, message}` envelope.
    fn read_envelope<T: DeserializeOwned>(
        response: &Response,
    ) -> Result<ApiEnvelope<T>, ClientError> {
        let envelope: Result<ApiEnvelope<T>, _> = response.json();

        if !response.is_success() {
            let message = match envelope {
                Ok(env) => env.message.unwrap_or_default(),
                Err(_) => response.text(),
            };
            return Err(ClientError::Status {
                status: response.status,
                message,
            });
        }

        let envelope = envelope.map_err(|e| ClientError::Decode(e.to_string()))?;
        if !envelope.success {
            return Err(ClientError::Rejected {
                message: envelope.message.unwrap_or_default(),
            });
        }
        Ok(envelope)
    }

    fn read_data<T: DeserializeOwned>(response: &Response) -> Result<T, ClientError> {
        Self::read_envelope::<T>(response)?
            .data
            .ok_or_else(|| ClientError::Decode("missing data field".to_string()))
    }

    /// Sign in and store the resulting session in the context.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let body = Self::encode(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .http
            .post(&self.url("/api/auth/login"), &body, &Self::json_headers())
            .await?;
        let login: LoginResponse = Self::read_data(&response)?;

        let session = Session::from_login(&login);
        let user = SessionUser::from(&login.user);
        self.session.set(session);
        tracing::info!(user = %user.username, role = %user.role, "Signed in");
        Ok(user)
    }

    /// Create an account. Does not sign in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let body = Self::encode(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        let response = self
            .http
            .post(&self.url("/api/auth/register"), &body, &Self::json_headers())
            .await?;
        Self::read_data(&response)
    }

    /// Revoke the token server-side and clear the local session.
    ///
    /// The local session is cleared even if the server call fails.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let headers = self.auth_headers()?;
        let result = self
            .http
            .post(&self.url("/api/auth/logout"), "{}", &headers)
            .await
            .map_err(ClientError::from)
            .and_then(|response| Self::read_envelope::<serde_json::Value>(&response).map(|_| ()));
        self.session.clear();
        result
    }

    /// Fetch the signed-in user.
    pub async fn me(&self) -> Result<User, ClientError> {
        let headers = self.auth_headers()?;
        let response = self.http.get(&self.url("/api/auth/me"), &headers).await?;
        Self::read_data(&response)
    }

    /// Fetch one page of users.
    pub async fn list_users(&self, limit: u32, page: u32) -> Result<UsersPage, ClientError> {
        let headers = self.auth_headers()?;
        let url = self.url(&format!("/api/admin/users?limit={}&page={}", limit, page));
        let response = self.http.get(&url, &headers).await?;
        Self::read_data(&response)
    }

    /// Delete a user account.
    pub async fn delete_user(&self, id: Uuid) -> Result<(), ClientError> {
        let headers = self.auth_headers()?;
        let url = self.url(&format!("/api/admin/users/{}", id));
        let response = self.http.delete(&url, &headers).await?;
        Self::read_envelope::<serde_json::Value>(&response).map(|_| ())
    }

    /// Fetch every brief question.
    pub async fn list_brief_questions(&self) -> Result<Vec<BriefQuestion>, ClientError> {
        let headers = self.auth_headers()?;
        let response = self
            .http
            .get(&self.url("/api/admin/brief-questions"), &headers)
            .await?;
        Self::read_data(&response)
    }

    /// Add a brief question.
    pub async fn create_brief_question(&self, question: &str) -> Result<BriefQuestion, ClientError> {
        let headers = self.auth_headers()?;
        let body = Self::encode(&CreateBriefQuestion {
            question: question.to_string(),
        })?;
        let response = self
            .http
            .post(&self.url("/api/admin/brief-question"), &body, &headers)
            .await?;
        Self::read_data(&response)
    }

    /// Remove a brief question.
    pub async fn delete_brief_question(&self, id: Uuid) -> Result<(), ClientError> {
        let headers = self.auth_headers()?;
        let url = self.url(&format!("/api/admin/brief-question/{}", id));
        let response = self.http.delete(&url, &headers).await?;
        Self::read_envelope::<serde_json::Value>(&response).map(|_| ())
    }
}
