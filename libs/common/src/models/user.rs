//! User model and related functionality

use serde::{Deserialize, Serialize};

use super::Role;
use crate::{collection::Record, error::DomainResult, validation};

/// How a user proves their identity at login
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Credentials {
    /// No usable password, login is refused
    #[default]
    Locked,
    /// Argon2 PHC string
    Password(String),
    /// Seeded demo account that accepts any password
    Demo,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: Role,
    #[serde(skip)]
    pub credentials: Credentials,
}

impl User {
    /// Build a user record from a validated profile. The id is assigned on insert.
    pub fn from_profile(profile: UserProfile, credentials: Credentials) -> Self {
        Self {
            id: 0,
            name: profile.name,
            email: profile.email,
            address: profile.address,
            role: profile.role,
            credentials,
        }
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// User creation and full-replacement update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub role: Role,
}

impl UserProfile {
    /// Trim whitespace and check every field
    pub fn normalized(self) -> DomainResult<Self> {
        let profile = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_ascii_lowercase(),
            address: self.address.trim().to_string(),
            role: self.role,
        };

        validation::validate_name(&profile.name)?;
        validation::validate_email(&profile.email)?;
        validation::validate_address(&profile.address)?;

        Ok(profile)
    }
}
