//! Response DTOs for the quiz server API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! quizzes themselves.

use serde::Serialize;

use crate::models::QuizId;

pub const QUIZ_UPDATED: &str = "Quiz updated successfully";
pub const QUIZ_DELETED: &str = "Quiz deleted successfully";
pub const RESULT_ADDED: &str = "Results added successfully";

/// Response body for quiz creation (POST /api/quizzes)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Identifier assigned by the store
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: QuizId) -> Self {
        Self { id: id.to_string() }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" when the store answers a ping, "unhealthy" otherwise
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self::with_status("healthy")
    }

    pub fn unhealthy() -> Self {
        Self::with_status("unhealthy")
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
