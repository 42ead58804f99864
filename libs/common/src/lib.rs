//! Common library for the store ratings application
//!
//! This crate holds the domain shared by the services: users, stores and
//! ratings, the in-memory catalog that keeps store averages consistent,
//! search, validation and the role-based dashboard views.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use common::seed::demo_catalog;
//!
//! let mut catalog = demo_catalog();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let outcome = catalog.submit_or_update_rating(1, 4, 5, today).unwrap();
//! assert_eq!(outcome.store_rating, Some(4.7));
//! ```

pub mod aggregation;
pub mod catalog;
pub mod collection;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod search;
pub mod seed;
pub mod validation;

pub use catalog::{Catalog, RatingOutcome};
pub use error::{DomainError, DomainResult};
