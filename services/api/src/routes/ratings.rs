//! Rating endpoints

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::models::Rating;
use serde_json::json;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    middleware::AuthUser,
    models::{RatingResponse, SubmitRatingRequest, UpdateRatingRequest},
};

/// Get all ratings
pub async fn get_ratings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let ratings = state.rating_repository.get_all().await;

    Ok(Json(json!({
        "success": true,
        "ratings": ratings,
    })))
}

/// Get the ratings of a store with rater names
pub async fn get_store_ratings(
    State(state): State<AppState>,
    ApiPath(store_id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    let ratings = state.rating_repository.get_by_store(store_id).await;

    Ok(Json(json!({
        "success": true,
        "ratings": ratings,
    })))
}

/// Get the ratings given by a user with store names
pub async fn get_user_ratings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    let ratings = state.rating_repository.get_by_user(user_id).await;

    Ok(Json(json!({
        "success": true,
        "ratings": ratings,
    })))
}

/// Rate a store as the current user, replacing an earlier rating
pub async fn submit_rating(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<SubmitRatingRequest>,
) -> ApiResult<impl IntoResponse> {
    let outcome = state
        .rating_repository
        .submit(payload.store_id, user.id, payload.rating)
        .await?;

    let (status, message) = if outcome.created {
        (StatusCode::CREATED, "Rating submitted successfully")
    } else {
        (StatusCode::OK, "Rating updated successfully")
    };

    Ok((
        status,
        Json(RatingResponse {
            success: true,
            message,
            rating: outcome.rating,
            store_rating: outcome.store_rating,
        }),
    ))
}

fn ensure_can_modify(user: &AuthUser, rating: &Rating) -> ApiResult<()> {
    if user.is_admin() || rating.user_id == user.id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Only the author or an admin can modify this rating".to_string(),
        ))
    }
}

/// Change the value of an existing rating
pub async fn update_rating(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<UpdateRatingRequest>,
) -> ApiResult<impl IntoResponse> {
    let existing = state.rating_repository.find_by_id(id).await?;
    ensure_can_modify(&user, &existing)?;

    let outcome = state.rating_repository.update(id, payload.rating).await?;

    Ok(Json(RatingResponse {
        success: true,
        message: "Rating updated successfully",
        rating: outcome.rating,
        store_rating: outcome.store_rating,
    }))
}

/// Delete a rating
pub async fn delete_rating(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    let existing = state.rating_repository.find_by_id(id).await?;
    ensure_can_modify(&user, &existing)?;

    let outcome = state.rating_repository.delete(id).await?;

    Ok(Json(RatingResponse {
        success: true,
        message: "Rating deleted successfully",
        rating: outcome.rating,
        store_rating: outcome.store_rating,
    }))
}
