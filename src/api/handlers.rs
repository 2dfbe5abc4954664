//! API Handlers
//!
//! HTTP request handlers for each quiz endpoint. Handlers hold no state of
//! their own; every operation goes straight to the injected store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::api::extract::JsonBody;
use crate::error::{QuizError, Result, StoreError};
use crate::models::responses::{QUIZ_DELETED, QUIZ_UPDATED, RESULT_ADDED};
use crate::models::{CreatedResponse, HealthResponse, Quiz, QuizId, QuizResult};
use crate::store::QuizStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Quiz persistence, safe for concurrent use
    pub store: Arc<dyn QuizStore>,
}

impl AppState {
    /// Creates a new AppState owning the given store.
    pub fn new(store: impl QuizStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from an already shared store.
    pub fn from_shared(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }
}

fn parse_id(raw: &str) -> Result<QuizId> {
    debug!("Received ID: {}", raw);
    raw.parse()
}

/// Handler for POST /api/quizzes
///
/// Stores a new quiz and returns its generated identifier.
pub async fn create_quiz_handler(
    State(state): State<AppState>,
    JsonBody(quiz): JsonBody<Quiz>,
) -> Result<Json<CreatedResponse>> {
    let id = state.store.insert(quiz).await?;
    info!("Created quiz {}", id);

    Ok(Json(CreatedResponse::new(id)))
}

/// Handler for GET /api/quizzes
pub async fn list_quizzes_handler(State(state): State<AppState>) -> Result<Json<Vec<Quiz>>> {
    let quizzes = state.store.find_all().await?;
    Ok(Json(quizzes))
}

/// Handler for GET /api/quizzes/:id
pub async fn get_quiz_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Quiz>> {
    let id = parse_id(&id)?;
    let quiz = state.store.find_by_id(id).await?.ok_or(QuizError::NotFound)?;

    Ok(Json(quiz))
}

/// Handler for PUT /api/quizzes/:id
///
/// Replaces title, questions and results wholesale. The identifier in the
/// path wins over any identifier in the body.
pub async fn update_quiz_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<JsonBody<Quiz>, QuizError>,
) -> Result<Json<&'static str>> {
    let id = parse_id(&id)?;
    let JsonBody(quiz) = body?;

    state.store.update(id, quiz).await?;
    info!("Updated quiz {}", id);

    Ok(Json(QUIZ_UPDATED))
}

/// Handler for DELETE /api/quizzes/:id
///
/// Succeeds whether or not the quiz existed.
pub async fn delete_quiz_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<&'static str>> {
    let id = parse_id(&id)?;

    state.store.delete(id).await?;
    info!("Deleted quiz {}", id);

    Ok(Json(QUIZ_DELETED))
}

/// Handler for POST /api/quizzes/:id/results
///
/// Appends a participant's result once it answers every question.
pub async fn add_result_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<JsonBody<QuizResult>, QuizError>,
) -> Result<Json<&'static str>> {
    let id = parse_id(&id)?;
    let JsonBody(result) = body?;

    let quiz = state.store.find_by_id(id).await?.ok_or(QuizError::NotFound)?;
    quiz.validate_result(&result)?;

    let question_count = quiz.questions.len();
    if !state.store.push_result(id, result.clone(), question_count).await? {
        // The quiz changed between the read and the append; retry once
        // against what is stored now.
        let current = state.store.find_by_id(id).await?.ok_or(QuizError::NotFound)?;
        current.validate_result(&result)?;
        warn!("Result append for quiz {} matched nothing, retrying", id);

        let question_count = current.questions.len();
        if !state.store.push_result(id, result.clone(), question_count).await? {
            return Err(StoreError::Backend(format!(
                "quiz {} changed while the result was being added",
                id
            ))
            .into());
        }
    }
    info!("Added result for {} to quiz {}", result.person_name, id);

    Ok(Json(RESULT_ADDED))
}

/// Handler for GET /health
///
/// Reports healthy only while the store answers a ping.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(err) => {
            warn!("Health check failed: {}", err);
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::unhealthy()))
        }
    }
}
