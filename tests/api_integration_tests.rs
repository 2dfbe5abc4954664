//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against the
//! in-process store.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use instant_quizzer::{api::create_router, store::MemoryQuizStore, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(MemoryQuizStore::new()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn sample_quiz() -> Value {
    json!({
        "quizTitle": "T",
        "questions": [
            {"questionTitle": "Q1", "possibleAnswers": ["a", "b"], "correctAnswers": [0]}
        ]
    })
}

async fn create_quiz(app: &Router, quiz: Value) -> String {
    let (status, json) = send(app, "POST", "/api/quizzes", Some(quiz)).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_str().unwrap().to_string()
}

// == Create / Get ==

#[tokio::test]
async fn test_create_then_get_returns_input_with_id() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;
    assert_eq!(id.len(), 24);

    let (status, json) = send(&app, "GET", &format!("/api/quizzes/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = sample_quiz();
    expected["id"] = json!(id);
    expected["results"] = json!([]);
    assert_eq!(json, expected);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = create_test_app();
    let mut quiz = sample_quiz();
    quiz["id"] = json!("65a1f0c2e4b0a1b2c3d4e5f6");

    let id = create_quiz(&app, quiz).await;
    assert_ne!(id, "65a1f0c2e4b0a1b2c3d4e5f6");
}

#[tokio::test]
async fn test_create_with_missing_fields_defaults() {
    let app = create_test_app();
    let id = create_quiz(&app, json!({})).await;

    let (_, json) = send(&app, "GET", &format!("/api/quizzes/{}", id), None).await;
    assert_eq!(json["quizTitle"], "");
    assert_eq!(json["questions"], json!([]));
    assert_eq!(json["results"], json!([]));
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/quizzes")
                .body(Body::from("{\"quizTitle\":"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid JSON format"));
}

#[tokio::test]
async fn test_get_not_found() {
    let app = create_test_app();
    let (status, json) = send(&app, "GET", "/api/quizzes/65a1f0c2e4b0a1b2c3d4e5f6", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Quiz not found");
}

#[tokio::test]
async fn test_malformed_ids_rejected() {
    let app = create_test_app();

    for (method, uri, body) in [
        ("GET", "/api/quizzes/123", None),
        ("PUT", "/api/quizzes/123", Some(sample_quiz())),
        ("DELETE", "/api/quizzes/123", None),
        ("POST", "/api/quizzes/123/results", Some(json!({"personName": "Bob", "responses": [true]}))),
    ] {
        let (status, json) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert_eq!(json["error"], "Invalid ID format");
    }
}

// == List ==

#[tokio::test]
async fn test_list_quizzes() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/api/quizzes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let first = create_quiz(&app, sample_quiz()).await;
    let second = create_quiz(&app, json!({"quizTitle": "Other"})).await;

    let (_, json) = send(&app, "GET", "/api/quizzes", None).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

// == Update ==

#[tokio::test]
async fn test_update_quiz() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;
    let uri = format!("/api/quizzes/{}", id);

    let (status, json) = send(&app, "PUT", &uri, Some(json!({"quizTitle": "Renamed"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!("Quiz updated successfully"));

    let (_, json) = send(&app, "GET", &uri, None).await;
    assert_eq!(json["id"], json!(id));
    assert_eq!(json["quizTitle"], "Renamed");
    assert_eq!(json["questions"], json!([]));
}

#[tokio::test]
async fn test_update_malformed_body() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/quizzes/{}", id),
        Some(json!({"questions": "not a list"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Delete ==

#[tokio::test]
async fn test_delete_quiz() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;
    let uri = format!("/api/quizzes/{}", id);

    let (status, json) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!("Quiz deleted successfully"));

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_succeeds() {
    let app = create_test_app();
    let (status, _) = send(&app, "DELETE", "/api/quizzes/65a1f0c2e4b0a1b2c3d4e5f6", None).await;
    assert_eq!(status, StatusCode::OK);
}

// == Results ==

#[tokio::test]
async fn test_add_result_example_flow() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/quizzes/{}/results", id),
        Some(json!({"personName": "Bob", "responses": [true]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!("Results added successfully"));

    let (_, json) = send(&app, "GET", &format!("/api/quizzes/{}", id), None).await;
    assert_eq!(
        json["results"],
        json!([{"personName": "Bob", "responses": [true]}])
    );
}

#[tokio::test]
async fn test_add_result_appends_in_order() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;
    let uri = format!("/api/quizzes/{}/results", id);

    for (name, answer) in [("Ann", true), ("Bob", false), ("Cy", true)] {
        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(json!({"personName": name, "responses": [answer]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = send(&app, "GET", &format!("/api/quizzes/{}", id), None).await;
    let names: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["personName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
}

#[tokio::test]
async fn test_add_result_length_mismatch() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;
    let uri = format!("/api/quizzes/{}/results", id);

    for responses in [json!([]), json!([true, true])] {
        let (status, json) = send(
            &app,
            "POST",
            &uri,
            Some(json!({"personName": "Bob", "responses": responses})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("does not match the number of questions"));
    }
}

#[tokio::test]
async fn test_add_result_unknown_quiz() {
    let app = create_test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/quizzes/65a1f0c2e4b0a1b2c3d4e5f6/results",
        Some(json!({"personName": "Bob", "responses": [true]})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_result_malformed_body() {
    let app = create_test_app();
    let id = create_quiz(&app, sample_quiz()).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/quizzes/{}/results", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Health ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
