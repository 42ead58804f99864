//! Store model and related functionality

use serde::{Deserialize, Serialize};

use crate::{collection::Record, error::DomainResult, validation};

/// Image reference used when a store is created without one
pub const DEFAULT_STORE_IMAGE: &str = "/placeholder.svg";

/// Store entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub description: String,
    /// Mean of all ratings for this store, one decimal place. Derived.
    pub rating: f64,
    pub image: String,
    /// Store-role user managing this store
    pub owner_id: Option<u64>,
}

impl Store {
    pub fn from_profile(profile: StoreProfile) -> Self {
        Self {
            id: 0,
            name: profile.name,
            email: profile.email,
            address: profile.address,
            description: profile.description,
            rating: 0.0,
            image: profile
                .image
                .unwrap_or_else(|| DEFAULT_STORE_IMAGE.to_string()),
            owner_id: profile.owner_id,
        }
    }

    /// Replace every editable field, keeping id and the derived rating
    pub fn apply_profile(&mut self, profile: StoreProfile) {
        self.name = profile.name;
        self.email = profile.email;
        self.address = profile.address;
        self.description = profile.description;
        if let Some(image) = profile.image {
            self.image = image;
        }
        self.owner_id = profile.owner_id;
    }
}

impl Record for Store {
    const ENTITY: &'static str = "Store";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Store creation and update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProfile {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub image: Option<String>,
    pub owner_id: Option<u64>,
}

impl StoreProfile {
    pub fn normalized(self) -> DomainResult<Self> {
        let profile = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_ascii_lowercase(),
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self
                .image
                .map(|image| image.trim().to_string())
                .filter(|image| !image.is_empty()),
            owner_id: self.owner_id,
        };

        validation::validate_name(&profile.name)?;
        validation::validate_email(&profile.email)?;
        validation::validate_address(&profile.address)?;
        validation::validate_description(&profile.description)?;

        Ok(profile)
    }
}
