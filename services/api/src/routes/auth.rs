//! Login, registration and session endpoints

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::validation;
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::ApiJson,
    middleware::AuthUser,
    models::{LoginRequest, LoginResponse, RegisterRequest, SessionUser},
};

/// Log in and open a session
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_email(&payload.email)
        .await
        .ok_or_else(|| {
            warn!("Login attempt for unknown email");
            ApiError::Unauthorized
        })?;

    if !state
        .user_repository
        .verify_password(&user, &payload.password)?
    {
        warn!("Invalid password for user {}", user.id);
        return Err(ApiError::Unauthorized);
    }

    let session = state.session_manager.create_session(&user).await;
    let token = state
        .jwt_service
        .generate_access_token(&session)
        .map_err(|e| {
            error!("Failed to generate access token: {}", e);
            ApiError::InternalServerError
        })?;

    info!("User {} logged in as {}", user.id, user.role);

    Ok(Json(LoginResponse {
        success: true,
        token,
        token_type: "Bearer",
        expires_in: state.jwt_service.access_token_expiry(),
        user: SessionUser::from(&session),
    }))
}

/// Register a new normal or store account
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let (profile, password) = payload.into_parts();
    validation::validate_self_registration_role(profile.role)?;

    let user = state
        .user_repository
        .create(profile, &password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Registration successful",
            "user": user,
        })),
    ))
}

/// End the current session
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    state.session_manager.delete_session(user.session_id).await;
    info!("User {} logged out", user.id);

    Ok(Json(json!({
        "success": true,
        "message": "Logged out successfully",
    })))
}

/// Current session
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let session = state
        .session_manager
        .get_session(user.session_id)
        .await
        .ok_or(ApiError::Unauthorized)?;

    Ok(Json(json!({
        "success": true,
        "session": session,
    })))
}
