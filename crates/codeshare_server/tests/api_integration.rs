//! Integration tests for the CodeShare HTTP API.

mod support;

use axum::http::StatusCode;
use codeshare_core::slug::generate_snippet_id;
use serde_json::json;
use support::{setup_test_server, test_config_for_db_path, test_server_for_config};
use tempfile::TempDir;

#[tokio::test]
async fn test_snippet_share_and_fetch() {
    let (server, _temp) = setup_test_server();
    let id = generate_snippet_id();

    // Share a snippet under a client-generated id
    let share_response = server
        .post(&format!("/api/snippets/{}", id))
        .json(&json!({
            "code": "console.log('hello')",
            "language": "javascript"
        }))
        .await;

    assert_eq!(share_response.status_code(), StatusCode::OK);
    let stored: serde_json::Value = share_response.json();
    assert_eq!(stored["code"], "console.log('hello')");
    assert_eq!(stored["language"], "javascript");

    // Fetch it back
    let get_response = server.get(&format!("/api/snippets/{}", id)).await;

    assert_eq!(get_response.status_code(), StatusCode::OK);
    let fetched: serde_json::Value = get_response.json();
    assert_eq!(fetched["code"], "console.log('hello')");
    assert_eq!(fetched["language"], "javascript");
}

#[tokio::test]
async fn test_fetch_unknown_id_returns_not_found() {
    let (server, _temp) = setup_test_server();

    let response = server.get("/api/snippets/does_not_exist").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_duplicate_id_is_a_conflict_and_keeps_original() {
    let (server, _temp) = setup_test_server();
    let id = generate_snippet_id();

    let first = server
        .post(&format!("/api/snippets/{}", id))
        .json(&json!({"code": "original", "language": "html"}))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    let second = server
        .post(&format!("/api/snippets/{}", id))
        .json(&json!({"code": "overwrite attempt", "language": "html"}))
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);

    let fetched = server.get(&format!("/api/snippets/{}", id)).await;
    let body: serde_json::Value = fetched.json();
    assert_eq!(body["code"], "original");
}

#[tokio::test]
async fn test_oversized_snippet_is_rejected() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut config = test_config_for_db_path(&temp_dir.path().join("test-db"));
    config.max_snippet_size = 64;
    let server = test_server_for_config(config);

    let response = server
        .post(&format!("/api/snippets/{}", generate_snippet_id()))
        .json(&json!({
            "code": "x".repeat(65),
            "language": "html"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_escaping_heavy_snippet_under_limit_is_accepted() {
    let temp_dir = TempDir::new().expect("temp dir");
    let mut config = test_config_for_db_path(&temp_dir.path().join("test-db"));
    config.max_snippet_size = 100_000;
    let server = test_server_for_config(config);
    let id = generate_snippet_id();

    // Every byte here doubles under JSON escaping; the code itself is under
    // the limit, so the share must succeed rather than trip the transport
    // body limit.
    let code = "\"".repeat(90_000);
    let response = server
        .post(&format!("/api/snippets/{}", id))
        .json(&json!({"code": code, "language": "json"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let fetched: serde_json::Value = server.get(&format!("/api/snippets/{}", id)).await.json();
    assert_eq!(fetched["code"].as_str().expect("code"), code);
}

#[tokio::test]
async fn test_invalid_id_segment_is_rejected() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post("/api/snippets/Not%20A%20Valid%20Id")
        .json(&json!({"code": "x", "language": "html"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_language_tag_is_rejected() {
    let (server, _temp) = setup_test_server();

    let response = server
        .post(&format!("/api/snippets/{}", generate_snippet_id()))
        .json(&json!({"code": "x", "language": "cobol"}))
        .await;

    // Serde rejects the closed-enum tag before the handler runs.
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wire_body_is_exactly_code_and_language() {
    let (server, _temp) = setup_test_server();
    let id = generate_snippet_id();

    server
        .post(&format!("/api/snippets/{}", id))
        .json(&json!({"code": "<p>hi</p>", "language": "html"}))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server.get(&format!("/api/snippets/{}", id)).await.json();
    let object = body.as_object().expect("json object");
    assert_eq!(object.len(), 2);
    assert!(object.contains_key("code"));
    assert!(object.contains_key("language"));
}
