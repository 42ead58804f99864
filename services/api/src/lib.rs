//! Store ratings HTTP API
//!
//! An axum service over the in-memory [`common::Catalog`]: users, stores,
//! ratings, sessions and the role-based dashboard.

pub mod config;
pub mod error;
pub mod extract;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
