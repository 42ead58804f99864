//! Rating repository

use chrono::Utc;
use common::{
    RatingOutcome,
    models::{Rating, RatingWithStore, RatingWithUser},
};
use tracing::info;

use super::SharedCatalog;
use crate::error::ApiResult;

/// Rating repository
#[derive(Clone)]
pub struct RatingRepository {
    catalog: SharedCatalog,
}

impl RatingRepository {
    /// Create a new rating repository
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Get all ratings
    pub async fn get_all(&self) -> Vec<Rating> {
        self.catalog.read().await.ratings().all().to_vec()
    }

    /// Find a rating by ID
    pub async fn find_by_id(&self, id: u64) -> ApiResult<Rating> {
        let catalog = self.catalog.read().await;
        Ok(catalog.ratings().require(id)?.clone())
    }

    /// Ratings for a store, each with the rater's name. Ratings outlive a
    /// deleted store and are still listed.
    pub async fn get_by_store(&self, store_id: u64) -> Vec<RatingWithUser> {
        self.catalog.read().await.ratings_with_users(store_id)
    }

    /// Ratings given by a user, each with the store's name. Ratings outlive
    /// a deleted user and are still listed.
    pub async fn get_by_user(&self, user_id: u64) -> Vec<RatingWithStore> {
        self.catalog.read().await.ratings_with_stores(user_id)
    }

    /// Submit a user's rating for a store, replacing an earlier one
    pub async fn submit(&self, store_id: u64, user_id: u64, value: i64) -> ApiResult<RatingOutcome> {
        let today = Utc::now().date_naive();
        let outcome = self
            .catalog
            .write()
            .await
            .submit_or_update_rating(store_id, user_id, value, today)?;

        info!(
            "User {} rated store {} with {} ({}), store rating is now {:?}",
            user_id,
            store_id,
            value,
            if outcome.created { "new" } else { "updated" },
            outcome.store_rating
        );
        Ok(outcome)
    }

    pub async fn update(&self, id: u64, value: i64) -> ApiResult<RatingOutcome> {
        let today = Utc::now().date_naive();
        let outcome = self.catalog.write().await.update_rating(id, value, today)?;
        info!("Updated rating {}", id);
        Ok(outcome)
    }

    pub async fn delete(&self, id: u64) -> ApiResult<RatingOutcome> {
        let outcome = self.catalog.write().await.delete_rating(id)?;
        info!("Deleted rating {}", id);
        Ok(outcome)
    }
}
