//! Role-based dashboard views
//!
//! A session's role selects exactly one view. Without a resolved role the
//! dashboard stays in the `Loading` state.

use serde::Serialize;

use crate::{
    aggregation::{self, StarDisplay},
    catalog::Catalog,
    error::{DomainError, DomainResult},
    models::{RatingValue, RatingWithStore, RatingWithUser, Role, Store, User},
    search,
};

/// Who is looking at the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: u64,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DashboardView {
    Admin(AdminDashboard),
    Store(StoreDashboard),
    User(UserDashboard),
    Loading,
}

impl DashboardView {
    /// Pick and build the view for the viewer's role
    pub fn resolve(viewer: Option<Viewer>, catalog: &Catalog, query: &str) -> DomainResult<Self> {
        let Some(viewer) = viewer else {
            return Ok(DashboardView::Loading);
        };

        match viewer.role {
            Role::Admin => Ok(DashboardView::Admin(AdminDashboard::build(catalog, query))),
            Role::Store => StoreDashboard::build(catalog, viewer.user_id).map(DashboardView::Store),
            Role::Normal => Ok(DashboardView::User(UserDashboard::build(
                catalog,
                viewer.user_id,
                query,
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub users: usize,
    pub stores: usize,
    pub ratings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminDashboard {
    pub totals: Totals,
    pub users: Vec<User>,
    pub stores: Vec<Store>,
}

impl AdminDashboard {
    pub fn build(catalog: &Catalog, query: &str) -> Self {
        Self {
            totals: Totals {
                users: catalog.users().len(),
                stores: catalog.stores().len(),
                ratings: catalog.ratings().len(),
            },
            users: search::filter(catalog.users().iter(), query)
                .into_iter()
                .cloned()
                .collect(),
            stores: search::filter(catalog.stores().iter(), query)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDashboard {
    pub store: Store,
    pub stars: StarDisplay,
    pub total_ratings: usize,
    /// Counts for one through five stars
    pub distribution: [u32; 5],
    pub ratings: Vec<RatingWithUser>,
}

impl StoreDashboard {
    pub fn build(catalog: &Catalog, owner_id: u64) -> DomainResult<Self> {
        let store = catalog
            .store_owned_by(owner_id)
            .ok_or(DomainError::NotFound {
                entity: "Store owned by user",
                id: owner_id,
            })?;

        let ratings = catalog.ratings_with_users(store.id);
        let distribution = aggregation::rating_distribution(ratings.iter().map(|r| r.rating.value));

        Ok(Self {
            store: store.clone(),
            stars: StarDisplay::from_rating(store.rating, RatingValue::MAX),
            total_ratings: ratings.len(),
            distribution,
            ratings,
        })
    }
}

/// A store as listed for a normal user, with that user's own rating
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListing {
    #[serde(flatten)]
    pub store: Store,
    pub stars: StarDisplay,
    pub my_rating: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDashboard {
    pub stores: Vec<StoreListing>,
    pub ratings: Vec<RatingWithStore>,
}

impl UserDashboard {
    pub fn build(catalog: &Catalog, user_id: u64, query: &str) -> Self {
        let stores = search::filter(catalog.stores().iter(), query)
            .into_iter()
            .map(|store| StoreListing {
                store: store.clone(),
                stars: StarDisplay::from_rating(store.rating, RatingValue::MAX),
                my_rating: catalog
                    .rating_by(user_id, store.id)
                    .map(|rating| rating.value.get()),
            })
            .collect();

        Self {
            stores,
            ratings: catalog.ratings_with_stores(user_id),
        }
    }
}
