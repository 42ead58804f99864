//! Role-based dashboard endpoint

use axum::{
    Extension, Json,
    extract::State,
    response::IntoResponse,
};
use common::dashboard::DashboardView;
use serde_json::json;

use crate::{
    AppState,
    error::ApiResult,
    extract::ApiQuery,
    middleware::AuthUser,
    models::SearchQuery,
};

/// Dashboard for the current session's role. Anonymous requests get the
/// loading view.
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<impl IntoResponse> {
    let viewer = user.map(|Extension(user)| user.viewer());

    let view = {
        let catalog = state.catalog.read().await;
        DashboardView::resolve(viewer, &catalog, query.term())?
    };

    Ok(Json(json!({
        "success": true,
        "dashboard": view,
    })))
}
