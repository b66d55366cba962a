//! Test helpers shared by the clip-ideas-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use clip_ideas_service::config::ClipIdeasConfig;
use clip_ideas_service::services::providers::mock::MockTextProvider;
use clip_ideas_service::startup::{build_router, AppState, Application};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const VALID_COMPLETION: &str =
    r##"{"clips":[{"id":1,"hook":"h","body":"b","tags":"#a"}]}"##;

pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Router wired to `provider`, with a fake credential.
pub fn router_with(provider: Arc<MockTextProvider>) -> Router {
    let state = AppState::new(ClipIdeasConfig::with_api_key("test-api-key"), provider);
    build_router(state)
}

pub fn json_request(method: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "POST,OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], ALLOW_HEADERS);
}

/// Spawn the application on a random port and return the port number.
pub async fn spawn_app(provider: Arc<MockTextProvider>) -> u16 {
    let config = ClipIdeasConfig::with_api_key("test-api-key");
    let app = Application::build_with_provider(config, provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}
