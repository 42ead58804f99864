//! User management endpoints (admin only)

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::models::UserProfile;
use serde_json::json;

use crate::{
    AppState,
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    middleware::AuthUser,
    models::{CreateUserRequest, SearchQuery},
};

/// Get all users, optionally filtered by `?search=`
pub async fn get_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let users = state.user_repository.get_all(query.term()).await;

    Ok(Json(json!({
        "success": true,
        "users": users,
    })))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let found = state.user_repository.find_by_id(id).await?;

    Ok(Json(json!({
        "success": true,
        "user": found,
    })))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let (profile, password) = payload.into_parts();
    let created = state
        .user_repository
        .create(profile, &password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User created successfully",
            "user": created,
        })),
    ))
}

/// Replace a user's profile
pub async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(profile): ApiJson<UserProfile>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let updated = state.user_repository.update(id, profile).await?;

    Ok(Json(json!({
        "success": true,
        "message": "User updated successfully",
        "user": updated,
    })))
}

/// Delete a user and end their sessions
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    state.user_repository.delete(id).await?;
    state.session_manager.delete_all_sessions(id).await;

    Ok(Json(json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}
