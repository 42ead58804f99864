//! In-memory catalog of users, stores and ratings
//!
//! Every mutation goes through [`Catalog`] so the derived `Store::rating`
//! is recomputed whenever a rating for that store changes.

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    aggregation,
    collection::Collection,
    error::{DomainError, DomainResult},
    models::{
        Credentials, Rating, RatingValue, RatingWithStore, RatingWithUser, Role, Store,
        StoreProfile, User, UserProfile,
    },
};

/// Result of a rating mutation
#[derive(Debug, Clone, PartialEq)]
pub struct RatingOutcome {
    pub rating: Rating,
    /// `true` when a new rating was appended, `false` when one was replaced
    pub created: bool,
    /// Recomputed rating of the store, `None` if the store no longer exists
    pub store_rating: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Collection<User>,
    stores: Collection<Store>,
    ratings: Collection<Rating>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a catalog from records that already carry ids.
    /// Store ratings are recomputed from `ratings`.
    pub fn from_parts(users: Vec<User>, stores: Vec<Store>, ratings: Vec<Rating>) -> Self {
        let mut catalog = Self {
            users: Collection::from_records(users),
            stores: Collection::from_records(stores),
            ratings: Collection::from_records(ratings),
        };

        let store_ids: Vec<u64> = catalog.stores.iter().map(|s| s.id).collect();
        for store_id in store_ids {
            catalog.recompute_store_rating(store_id);
        }

        catalog
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn stores(&self) -> &Collection<Store> {
        &self.stores
    }

    pub fn ratings(&self) -> &Collection<Rating> {
        &self.ratings
    }

    // Users

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.has_email(email))
    }

    fn ensure_email_available(&self, email: &str, except: Option<u64>) -> DomainResult<()> {
        match self.find_user_by_email(email) {
            Some(user) if Some(user.id) != except => Err(DomainError::Conflict(format!(
                "A user with email {email} already exists"
            ))),
            _ => Ok(()),
        }
    }

    pub fn create_user(
        &mut self,
        profile: UserProfile,
        credentials: Credentials,
    ) -> DomainResult<User> {
        let profile = profile.normalized()?;
        self.ensure_email_available(&profile.email, None)?;

        let user = self.users.create(User::from_profile(profile, credentials));
        debug!(user_id = user.id, role = %user.role, "Created user");
        Ok(user)
    }

    /// Replace name, email, address and role. Credentials are kept.
    pub fn update_user(&mut self, id: u64, profile: UserProfile) -> DomainResult<User> {
        let profile = profile.normalized()?;
        let credentials = self.users.require(id)?.credentials.clone();
        self.ensure_email_available(&profile.email, Some(id))?;

        let mut user = User::from_profile(profile, credentials);
        user.id = id;
        self.users.update(user)
    }

    /// Ratings and store ownership referring to the user are left in place
    pub fn delete_user(&mut self, id: u64) -> DomainResult<User> {
        self.users.delete(id)
    }

    // Stores

    fn ensure_store_owner(&self, owner_id: Option<u64>) -> DomainResult<()> {
        let Some(owner_id) = owner_id else {
            return Ok(());
        };

        let owner = self.users.require(owner_id)?;
        if owner.role != Role::Store {
            return Err(DomainError::Validation(format!(
                "User {owner_id} does not have the store role"
            )));
        }

        Ok(())
    }

    pub fn create_store(&mut self, profile: StoreProfile) -> DomainResult<Store> {
        let profile = profile.normalized()?;
        self.ensure_store_owner(profile.owner_id)?;

        let store = self.stores.create(Store::from_profile(profile));
        debug!(store_id = store.id, "Created store");
        Ok(store)
    }

    /// Replace the editable fields of a store. The rating stays derived.
    pub fn update_store(&mut self, id: u64, profile: StoreProfile) -> DomainResult<Store> {
        let profile = profile.normalized()?;
        self.ensure_store_owner(profile.owner_id)?;

        let store = self.stores.require_mut(id)?;
        store.apply_profile(profile);
        Ok(store.clone())
    }

    /// Update a store on behalf of an editor. Admins may change every field;
    /// the store's owner may edit it but cannot hand it over.
    pub fn update_store_as(
        &mut self,
        editor_id: u64,
        editor_role: Role,
        id: u64,
        mut profile: StoreProfile,
    ) -> DomainResult<Store> {
        let store = self.stores.require(id)?;

        if editor_role != Role::Admin {
            if store.owner_id != Some(editor_id) {
                return Err(DomainError::Forbidden(
                    "Only an admin or the store owner can update this store".to_string(),
                ));
            }
            profile.owner_id = store.owner_id;
        }

        self.update_store(id, profile)
    }

    /// Ratings for the store are left in place
    pub fn delete_store(&mut self, id: u64) -> DomainResult<Store> {
        self.stores.delete(id)
    }

    pub fn store_owned_by(&self, user_id: u64) -> Option<&Store> {
        self.stores
            .iter()
            .find(|store| store.owner_id == Some(user_id))
    }

    // Ratings

    pub fn ratings_for_store(&self, store_id: u64) -> impl Iterator<Item = &Rating> {
        self.ratings
            .iter()
            .filter(move |rating| rating.store_id == store_id)
    }

    pub fn ratings_by_user(&self, user_id: u64) -> impl Iterator<Item = &Rating> {
        self.ratings
            .iter()
            .filter(move |rating| rating.user_id == user_id)
    }

    pub fn rating_by(&self, user_id: u64, store_id: u64) -> Option<&Rating> {
        self.ratings
            .iter()
            .find(|rating| rating.user_id == user_id && rating.store_id == store_id)
    }

    /// Ratings for a store with the rater's name
    pub fn ratings_with_users(&self, store_id: u64) -> Vec<RatingWithUser> {
        self.ratings_for_store(store_id)
            .map(|rating| RatingWithUser {
                rating: rating.clone(),
                username: self.users.get(rating.user_id).map(|u| u.name.clone()),
            })
            .collect()
    }

    /// Ratings given by a user with the store's name
    pub fn ratings_with_stores(&self, user_id: u64) -> Vec<RatingWithStore> {
        self.ratings_by_user(user_id)
            .map(|rating| RatingWithStore {
                rating: rating.clone(),
                store_name: self.stores.get(rating.store_id).map(|s| s.name.clone()),
            })
            .collect()
    }

    /// Store the user's rating for a store, replacing any previous one,
    /// and recompute the store's average.
    pub fn submit_or_update_rating(
        &mut self,
        store_id: u64,
        user_id: u64,
        value: i64,
        date: NaiveDate,
    ) -> DomainResult<RatingOutcome> {
        let value = RatingValue::new(value)?;
        self.stores.require(store_id)?;
        self.users.require(user_id)?;

        let existing = self.rating_by(user_id, store_id).map(|rating| rating.id);
        let (rating, created) = match existing {
            Some(id) => {
                let rating = self.ratings.require_mut(id)?;
                rating.value = value;
                rating.date = date;
                (rating.clone(), false)
            }
            None => {
                let rating = self.ratings.create(Rating {
                    id: 0,
                    store_id,
                    user_id,
                    value,
                    date,
                });
                (rating, true)
            }
        };

        let store_rating = self.recompute_store_rating(store_id);
        Ok(RatingOutcome {
            rating,
            created,
            store_rating,
        })
    }

    /// Change the value and date of an existing rating by id
    pub fn update_rating(
        &mut self,
        id: u64,
        value: i64,
        date: NaiveDate,
    ) -> DomainResult<RatingOutcome> {
        let value = RatingValue::new(value)?;

        let rating = self.ratings.require_mut(id)?;
        rating.value = value;
        rating.date = date;
        let rating = rating.clone();

        let store_rating = self.recompute_store_rating(rating.store_id);
        Ok(RatingOutcome {
            rating,
            created: false,
            store_rating,
        })
    }

    pub fn delete_rating(&mut self, id: u64) -> DomainResult<RatingOutcome> {
        let rating = self.ratings.delete(id)?;
        let store_rating = self.recompute_store_rating(rating.store_id);
        Ok(RatingOutcome {
            rating,
            created: false,
            store_rating,
        })
    }

    fn recompute_store_rating(&mut self, store_id: u64) -> Option<f64> {
        let average =
            aggregation::average_rating(self.ratings_for_store(store_id).map(|r| r.value));

        let store = self.stores.get_mut(store_id)?;
        store.rating = average;
        debug!(store_id, rating = average, "Recomputed store rating");
        Some(average)
    }
}
