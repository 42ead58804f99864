//! Application state shared across handlers

use std::sync::Arc;

use common::Catalog;
use tokio::sync::RwLock;

use crate::{
    jwt::JwtService,
    repositories::{RatingRepository, SharedCatalog, StoreRepository, UserRepository},
    session::SessionManager,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: SharedCatalog,
    pub jwt_service: JwtService,
    pub session_manager: SessionManager,
    pub user_repository: UserRepository,
    pub store_repository: StoreRepository,
    pub rating_repository: RatingRepository,
}

impl AppState {
    /// Wrap a catalog and wire the repositories around it
    pub fn new(catalog: Catalog, jwt_service: JwtService) -> Self {
        let catalog: SharedCatalog = Arc::new(RwLock::new(catalog));

        Self {
            user_repository: UserRepository::new(catalog.clone()),
            store_repository: StoreRepository::new(catalog.clone()),
            rating_repository: RatingRepository::new(catalog.clone()),
            session_manager: SessionManager::new(),
            jwt_service,
            catalog,
        }
    }
}
