//! Authentication middleware resolving bearer tokens to sessions

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use common::{dashboard::Viewer, models::Role};
use tracing::warn;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    session::Session,
    state::AppState,
};

/// Authenticated user information
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: u64,
    pub role: Role,
    pub session_id: Uuid,
}

impl From<&Session> for AuthUser {
    fn from(session: &Session) -> Self {
        AuthUser {
            id: session.user_id,
            role: session.role,
            session_id: session.id,
        }
    }
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn require_admin(&self) -> ApiResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::Forbidden("Admin access required".to_string()))
        }
    }

    pub fn viewer(&self) -> Viewer {
        Viewer {
            user_id: self.id,
            role: self.role,
        }
    }
}

type BearerHeader = TypedHeader<Authorization<Bearer>>;

async fn authenticate(state: &AppState, bearer: Option<BearerHeader>) -> ApiResult<AuthUser> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(ApiError::Unauthorized)?;

    let claims = state
        .jwt_service
        .validate_token(bearer.token())
        .map_err(|e| {
            warn!("Failed to validate token: {}", e);
            ApiError::Unauthorized
        })?;

    let session = state
        .session_manager
        .get_session(claims.sid)
        .await
        .ok_or_else(|| {
            warn!("Token refers to an ended session: {}", claims.sid);
            ApiError::Unauthorized
        })?;

    Ok(AuthUser::from(&session))
}

/// Authentication middleware. Rejects requests without a live session.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&state, bearer).await?;

    // Insert the user into the request extensions
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Session middleware. Attaches the user when a live session is presented and
/// lets anonymous requests through.
pub async fn session_middleware(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if bearer.is_some() {
        if let Ok(user) = authenticate(&state, bearer).await {
            req.extensions_mut().insert(user);
        }
    }

    next.run(req).await
}
