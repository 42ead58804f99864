//! API service routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;

use crate::{
    AppState,
    middleware::{auth_middleware, session_middleware},
};

pub mod auth;
pub mod dashboard;
pub mod ratings;
pub mod stores;
pub mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/users", get(users::get_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/stores", post(stores::create_store))
        .route(
            "/stores/:id",
            put(stores::update_store).delete(stores::delete_store),
        )
        .route("/ratings", post(ratings::submit_rating))
        .route(
            "/ratings/:id",
            put(ratings::update_rating).delete(ratings::delete_rating),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let session_routes = Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/stores", get(stores::get_stores))
        .route("/stores/:id", get(stores::get_store))
        .route("/ratings", get(ratings::get_ratings))
        .route("/ratings/store/:id", get(ratings::get_store_ratings))
        .route("/ratings/user/:id", get(ratings::get_user_ratings))
        .merge(protected_routes)
        .merge(session_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "rating-api"
    }))
}
