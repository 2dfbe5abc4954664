//! API Module
//!
//! HTTP handlers and routing for the quiz REST API.
//!
//! # Endpoints
//! - `POST /api/quizzes` - Create a quiz
//! - `GET /api/quizzes` - List all quizzes
//! - `GET /api/quizzes/:id` - Fetch one quiz
//! - `PUT /api/quizzes/:id` - Replace a quiz
//! - `DELETE /api/quizzes/:id` - Delete a quiz
//! - `POST /api/quizzes/:id/results` - Append a participant's result
//! - `GET /health` - Health check endpoint

pub mod extract;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
