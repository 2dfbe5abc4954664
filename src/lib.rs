//! Instant Quizzer - a small quiz management backend
//!
//! CRUD over quizzes stored in MongoDB, plus appending participant results.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
