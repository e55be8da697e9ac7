//! REST handlers.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::error::ApiError;
use super::extract::{AdminUser, AuthUser};
use super::state::AppState;
use super::store::DEFAULT_PAGE_LIMIT;
use crate::models::{
    ApiEnvelope, BriefQuestion, CreateBriefQuestion, LoginRequest, LoginResponse,
    RegisterRequest, User, UsersPage,
};

type ApiResult<T> = Result<Json<ApiEnvelope<T>>, ApiError>;

pub async fn health() -> Json<ApiEnvelope<()>> {
    Json(ApiEnvelope::ok_message("ok"))
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<User>>), ApiError> {
    let Json(request) = payload?;
    let user = state.store.write().await.register(&request)?;
    tracing::info!(user = %user.username, "Registered user");
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(user))))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = payload?;
    let result = state
        .store
        .write()
        .await
        .login(&request.email, &request.password);

    match result {
        Ok((token, user)) => {
            tracing::info!(user = %user.username, role = %user.role, "User signed in");
            Ok(Json(ApiEnvelope::ok(LoginResponse { token, user })))
        }
        Err(e) => {
            tracing::warn!(email = %request.email, "Failed sign-in");
            Err(e)
        }
    }
}

pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<()> {
    state.store.write().await.logout(&auth.token);
    Ok(Json(ApiEnvelope::ok_message("Signed out")))
}

pub async fn me(auth: AuthUser) -> ApiResult<User> {
    Ok(Json(ApiEnvelope::ok(auth.user)))
}

/// Query string of `GET /api/admin/users`.
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    query: Result<Query<UsersQuery>, QueryRejection>,
) -> ApiResult<UsersPage> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let page = query.page.unwrap_or(1);
    let users = state.store.read().await.list_users(limit, page);
    Ok(Json(ApiEnvelope::ok(users)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    if admin.id == id {
        return Err(ApiError::BadRequest(
            "You cannot delete your own account".to_string(),
        ));
    }
    state.store.write().await.delete_user(id)?;
    tracing::info!(admin = %admin.username, %id, "Deleted user");
    Ok(Json(ApiEnvelope::ok_message("User deleted")))
}

pub async fn list_brief_questions(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> ApiResult<Vec<BriefQuestion>> {
    let questions = state.store.read().await.brief_questions();
    Ok(Json(ApiEnvelope::ok(questions)))
}

pub async fn create_brief_question(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    payload: Result<Json<CreateBriefQuestion>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiEnvelope<BriefQuestion>>), ApiError> {
    let Json(request) = payload?;
    let question = state
        .store
        .write()
        .await
        .add_brief_question(&request.question)?;
    Ok((StatusCode::CREATED, Json(ApiEnvelope::ok(question))))
}

pub async fn delete_brief_question(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<()> {
    let Path(id) = id?;
    state.store.write().await.delete_brief_question(id)?;
    Ok(Json(ApiEnvelope::ok_message("Brief question deleted")))
}
