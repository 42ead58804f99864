//! Custom error types for the common library
//!
//! This module defines the domain error type returned by every catalog
//! operation. The API service maps these onto HTTP statuses.

use thiserror::Error;

/// Custom error type for domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Operation would violate a uniqueness rule
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Caller is not allowed to perform the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        DomainError::NotFound { entity, id }
    }
}

/// Type alias for Result with DomainError
pub type DomainResult<T> = Result<T, DomainError>;
