//! API Routes
//!
//! Configures the Axum router with all quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_result_handler, create_quiz_handler, delete_quiz_handler, get_quiz_handler,
    health_handler, list_quizzes_handler, update_quiz_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/quizzes",
            post(create_quiz_handler).get(list_quizzes_handler),
        )
        .route(
            "/api/quizzes/:id",
            get(get_quiz_handler)
                .put(update_quiz_handler)
                .delete(delete_quiz_handler),
        )
        .route("/api/quizzes/:id/results", post(add_result_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
