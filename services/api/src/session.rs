//! Session management
//!
//! A session is created on login and torn down on logout. Tokens stay
//! signed and self-contained, but a token whose session is gone is rejected.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use common::models::{Role, User};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// An authenticated user's session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Session manager for handling user sessions in memory
#[derive(Clone, Default)]
pub struct SessionManager {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for a user
    pub async fn create_session(&self, user: &User) -> Session {
        info!("Creating session for user: {}", user.id);

        let session = Session {
            id: Uuid::new_v4(),
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: Utc::now(),
        };

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());

        session
    }

    /// Get a session by id
    pub async fn get_session(&self, session_id: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    /// Delete a session, returning whether it existed
    pub async fn delete_session(&self, session_id: Uuid) -> bool {
        info!("Deleting session: {}", session_id);
        self.sessions.write().await.remove(&session_id).is_some()
    }

    /// Delete all sessions for a user (logout from all devices)
    pub async fn delete_all_sessions(&self, user_id: u64) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.user_id != user_id);
        let removed = before - sessions.len();

        if removed > 0 {
            info!("Deleted {} sessions for user: {}", removed, user_id);
        }

        removed
    }
}
