//! Store endpoints

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use common::models::StoreProfile;
use serde_json::json;

use crate::{
    AppState,
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery},
    middleware::AuthUser,
    models::SearchQuery,
};

/// Get all stores, optionally filtered by `?search=`
pub async fn get_stores(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let stores = state.store_repository.get_all(query.term()).await;

    Ok(Json(json!({
        "success": true,
        "stores": stores,
    })))
}

/// Get a store by ID
pub async fn get_store(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store_repository.find_by_id(id).await?;

    Ok(Json(json!({
        "success": true,
        "store": store,
    })))
}

/// Create a new store
pub async fn create_store(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiJson(profile): ApiJson<StoreProfile>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    let store = state.store_repository.create(profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Store created successfully",
            "store": store,
        })),
    ))
}

/// Update a store. Owners may edit their store but not hand it over.
pub async fn update_store(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(profile): ApiJson<StoreProfile>,
) -> ApiResult<impl IntoResponse> {
    let store = state
        .store_repository
        .update(user.id, user.role, id, profile)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Store updated successfully",
        "store": store,
    })))
}

/// Delete a store. Its ratings are kept.
pub async fn delete_store(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    user.require_admin()?;

    state.store_repository.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Store deleted successfully",
    })))
}
