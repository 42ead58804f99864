//! Domain models

pub mod rating;
pub mod role;
pub mod store;
pub mod user;

// Re-export for convenience
pub use rating::{Rating, RatingValue, RatingWithStore, RatingWithUser};
pub use role::Role;
pub use store::{DEFAULT_STORE_IMAGE, Store, StoreProfile};
pub use user::{Credentials, User, UserProfile};
