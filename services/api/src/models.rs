//! API models for request and response payloads

use common::models::{Rating, Role, UserProfile};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Request for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The user a session belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        SessionUser {
            id: session.user_id,
            name: session.name.clone(),
            email: session.email.clone(),
            role: session.role,
        }
    }
}

/// Response for a successful login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: u64,
    pub user: SessionUser,
}

/// Request for self-registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl RegisterRequest {
    pub fn into_parts(self) -> (UserProfile, String) {
        let profile = UserProfile {
            name: self.name,
            email: self.email,
            address: self.address,
            role: self.role.unwrap_or_default(),
        };
        (profile, self.password)
    }
}

/// Request for creating a user from the admin panel
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub role: Role,
    pub password: String,
}

impl CreateUserRequest {
    pub fn into_parts(self) -> (UserProfile, String) {
        let profile = UserProfile {
            name: self.name,
            email: self.email,
            address: self.address,
            role: self.role,
        };
        (profile, self.password)
    }
}

/// `?search=` query for list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

impl SearchQuery {
    pub fn term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

/// Request for rating a store as the current user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub store_id: u64,
    pub rating: i64,
}

/// Request for changing an existing rating
#[derive(Debug, Deserialize)]
pub struct UpdateRatingRequest {
    pub rating: i64,
}

/// Response for rating mutations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub success: bool,
    pub message: &'static str,
    pub rating: Rating,
    /// Recomputed store average, absent when the store was deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_rating: Option<f64>,
}
