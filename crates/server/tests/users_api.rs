mod common;

use reqwest::{Method, StatusCode};
use serde_json::json;

use common::{app, send};

#[tokio::test]
async fn create_then_fetch_by_id_and_email() {
    let app = app().await;
    let (status, created) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Alice", "email": "alice@example.com"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Alice");
    let id = created["id"].as_str().expect("id").to_string();

    let (status, by_id) = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id["email"], "alice@example.com");

    let (status, by_email) = send(&app, Method::GET, "/api/users/by-email?email=alice@example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_email["id"], id.as_str());

    let (status, all) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = app().await;
    let body = json!({"name": "Alice", "email": "alice@example.com"});
    let (status, _) = send(&app, Method::POST, "/api/users", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, err) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Other", "email": "alice@example.com"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["error"], "Conflict");
    assert!(err["message"].as_str().unwrap_or_default().contains("alice@example.com"));

    let (_, all) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn invalid_input_is_bad_request() {
    let app = app().await;
    let (status, err) = send(&app, Method::POST, "/api/users", Some(json!({"name": "  ", "email": "alice@example.com"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Invalid Input");

    let (status, _) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Alice", "email": "not-an-email"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rename_via_every_route() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Alice", "email": "alice@example.com"}))).await;
    let id = created["id"].as_str().expect("id").to_string();

    let (status, u) = send(&app, Method::PUT, &format!("/api/users/{id}"), Some(json!({"name": "Alicia"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(u["name"], "Alicia");

    let (status, u) = send(&app, Method::PATCH, &format!("/api/users/{id}"), Some(json!({"name": "Ali"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(u["name"], "Ali");

    let (status, u) = send(&app, Method::PATCH, &format!("/api/users/{id}/name"), Some(json!({"name": "Al"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(u["name"], "Al");
    assert_eq!(u["email"], "alice@example.com");
    assert_eq!(u["id"], id.as_str());
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let app = app().await;
    let id = uuid::Uuid::new_v4();

    let (status, err) = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");

    let (status, _) = send(&app, Method::PATCH, &format!("/api/users/{id}/name"), Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/users/by-email?email=ghost@example.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Alice", "email": "alice@example.com"}))).await;
    let id = created["id"].as_str().expect("id").to_string();

    let (status, body) = send(&app, Method::DELETE, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send(&app, Method::GET, &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_metrics_and_docs() {
    let app = app().await;
    let (status, health) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "ok"}));

    let (status, metrics) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(metrics.as_str().unwrap_or_default().contains("todo_api_http_requests_total"));

    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/todos"].is_object());
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let app = app().await;

    let (status, err) = send(&app, Method::GET, "/api/users/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");

    let (status, err) = send(&app, Method::DELETE, "/api/users/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "Not Found");

    let (status, err) = send(&app, Method::POST, "/api/users", Some(json!({"name": "Alice"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Invalid Input");
    assert!(err["message"].as_str().unwrap_or_default().contains("email"));

    let (status, err) = send(&app, Method::GET, "/api/users/by-email", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Invalid Input");

    let (_, all) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(all, json!([]));
}
