//! Router-level behavior shared by all resources

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_endpoints() {
    let app = app();

    let response = app.server.get("/health").await;
    response.assert_status(StatusCode::OK);

    app.server.get("/healthz").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = app();

    let response = app.server.get("/menus").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "status": 404, "code": "NOT_FOUND", "message": "Path not found: /menus" })
    );
}

#[tokio::test]
async fn test_empty_body_counts_as_empty_data() {
    let app = app();

    let response = app.server.post("/orders").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(error_message(&body), "Order must have at least one dish");
}
