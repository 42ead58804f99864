//! Rating model and related functionality

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    collection::Record,
    error::{DomainError, DomainResult},
};

/// Star value of a rating, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> DomainResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::Validation(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for RatingValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

/// Rating entity. At most one per (user, store) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: u64,
    pub store_id: u64,
    pub user_id: u64,
    #[serde(rename = "rating")]
    pub value: RatingValue,
    pub date: NaiveDate,
}

impl Record for Rating {
    const ENTITY: &'static str = "Rating";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// A rating listed alongside the name of the user who gave it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithUser {
    #[serde(flatten)]
    pub rating: Rating,
    pub username: Option<String>,
}

/// A rating listed alongside the name of the store it is for
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingWithStore {
    #[serde(flatten)]
    pub rating: Rating,
    pub store_name: Option<String>,
}
