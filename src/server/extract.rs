//! Bearer-token extractors.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use super::error::ApiError;
use super::state::AppState;
use crate::models::User;

/// The caller identified by a live bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

/// An authenticated caller with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    tracing::warn!(path = %parts.uri.path(), "Missing bearer token");
                    ApiError::Unauthorized
                })?;

        let token = bearer.token().to_string();
        let user = state.store.read().await.user_for_token(&token);
        match user {
            Some(user) => Ok(AuthUser { user, token }),
            None => {
                tracing::warn!(path = %parts.uri.path(), "Rejected unknown bearer token");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser { user, .. } = AuthUser::from_request_parts(parts, state).await?;
        if !user.role.is_admin() {
            tracing::warn!(user = %user.username, path = %parts.uri.path(), "Non-admin on admin route");
            return Err(ApiError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
