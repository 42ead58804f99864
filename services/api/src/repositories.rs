//! Repositories over the shared in-memory catalog
//!
//! Each call takes the catalog lock once, so a mutation and the store
//! rating recomputation it triggers are seen atomically by other requests.

use std::sync::Arc;

use common::{
    Catalog,
    models::{Credentials, Role, Store, StoreProfile, User, UserProfile},
    search, validation,
};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    password,
};

pub mod rating;

pub use rating::RatingRepository;

/// Catalog handle shared by every repository
pub type SharedCatalog = Arc<RwLock<Catalog>>;

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    catalog: SharedCatalog,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Create a new user. The password is validated and hashed first.
    pub async fn create(&self, profile: UserProfile, password: &str) -> ApiResult<User> {
        validation::validate_password(password)?;
        let password_hash = password::hash_password(password).map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::InternalServerError
        })?;

        let user = self
            .catalog
            .write()
            .await
            .create_user(profile, Credentials::Password(password_hash))?;

        info!("Created user {} with role {}", user.id, user.role);
        Ok(user)
    }

    /// Get all users matching a search query
    pub async fn get_all(&self, query: &str) -> Vec<User> {
        let catalog = self.catalog.read().await;
        search::filter(catalog.users().iter(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: u64) -> ApiResult<User> {
        let catalog = self.catalog.read().await;
        Ok(catalog.users().require(id)?.clone())
    }

    /// Find a user by email, ignoring case
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.catalog.read().await.find_user_by_email(email).cloned()
    }

    pub async fn update(&self, id: u64, profile: UserProfile) -> ApiResult<User> {
        let user = self.catalog.write().await.update_user(id, profile)?;
        info!("Updated user {}", id);
        Ok(user)
    }

    pub async fn delete(&self, id: u64) -> ApiResult<User> {
        let user = self.catalog.write().await.delete_user(id)?;
        info!("Deleted user {}", id);
        Ok(user)
    }

    /// Verify a user's password. Demo accounts accept any password.
    pub fn verify_password(&self, user: &User, password: &str) -> ApiResult<bool> {
        match &user.credentials {
            Credentials::Demo => Ok(true),
            Credentials::Locked => Ok(false),
            Credentials::Password(password_hash) => {
                password::verify_password(password_hash, password).map_err(|e| {
                    error!("Failed to verify password for user {}: {}", user.id, e);
                    ApiError::InternalServerError
                })
            }
        }
    }
}

/// Store repository
#[derive(Clone)]
pub struct StoreRepository {
    catalog: SharedCatalog,
}

impl StoreRepository {
    /// Create a new store repository
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    pub async fn create(&self, profile: StoreProfile) -> ApiResult<Store> {
        let store = self.catalog.write().await.create_store(profile)?;
        info!("Created store {}", store.id);
        Ok(store)
    }

    /// Get all stores matching a search query
    pub async fn get_all(&self, query: &str) -> Vec<Store> {
        let catalog = self.catalog.read().await;
        search::filter(catalog.stores().iter(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Find a store by ID
    pub async fn find_by_id(&self, id: u64) -> ApiResult<Store> {
        let catalog = self.catalog.read().await;
        Ok(catalog.stores().require(id)?.clone())
    }

    /// Update a store on behalf of an editor, checking ownership under the same lock
    pub async fn update(
        &self,
        editor_id: u64,
        editor_role: Role,
        id: u64,
        profile: StoreProfile,
    ) -> ApiResult<Store> {
        let store = self
            .catalog
            .write()
            .await
            .update_store_as(editor_id, editor_role, id, profile)?;
        info!("User {} updated store {}", editor_id, id);
        Ok(store)
    }

    pub async fn delete(&self, id: u64) -> ApiResult<Store> {
        let store = self.catalog.write().await.delete_store(id)?;
        info!("Deleted store {}", id);
        Ok(store)
    }
}
