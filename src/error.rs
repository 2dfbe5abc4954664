//! Error types for the quiz server
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures raised by a document store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The operation did not complete before its deadline
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    /// The backend rejected or failed the operation
    #[error("{0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

// == Quiz Error Enum ==
/// Unified error type for the quiz API.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Path identifier is not a valid store identifier
    #[error("Invalid ID format")]
    InvalidId,

    /// Request body could not be decoded
    #[error("Invalid JSON format: {0}")]
    InvalidBody(String),

    /// No quiz exists under the identifier
    #[error("Quiz not found")]
    NotFound,

    /// Submitted result does not answer every question exactly once
    #[error(
        "The number of responses ({actual}) does not match the number of questions in the quiz ({expected})."
    )]
    ResponseCountMismatch { expected: usize, actual: usize },

    /// Document store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuizError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuizError::InvalidId
            | QuizError::InvalidBody(_)
            | QuizError::ResponseCountMismatch { .. } => StatusCode::BAD_REQUEST,
            QuizError::NotFound => StatusCode::NOT_FOUND,
            QuizError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let QuizError::Store(err) = &self {
            tracing::error!("Store failure: {}", err);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Config Error Enum ==
/// Startup configuration failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not found")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the quiz API.
pub type Result<T> = std::result::Result<T, QuizError>;
