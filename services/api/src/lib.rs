//! mygram photo-sharing API
//!
//! Users register and log in, then manage their photos, comments on photos,
//! and social media links. Every mutation is restricted to the owner.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
