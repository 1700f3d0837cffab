use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lioncash_api::config::{ServerConfig, ValidationMode};
use lioncash_api::router::build_app_router;
use lioncash_api::state::AppState;
use lioncash_content::{ContentCatalog, ContentPaths};
use lioncash_db::store::{FormStore, MemoryFormStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        data_dir: fixture_data_dir(),
        site_base_url: "https://www.lioncashadvance.com".to_string(),
        validation_mode: ValidationMode::Warn,
    }
}

fn fixture_data_dir() -> String {
    format!("{}/tests/fixtures/data", env!("CARGO_MANIFEST_DIR"))
}

/// Build the full application router over the fixture data directory and a
/// fresh in-memory store.
///
/// This goes through [`build_app_router`] so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses. The store handle is returned alongside
/// the router so tests can inspect what was written.
pub fn build_test_app() -> (Router, Arc<MemoryFormStore>) {
    let config = test_config();
    let paths = ContentPaths::new(&config.data_dir);
    let catalog = ContentCatalog::load(&paths).expect("fixture catalog must load");

    let store = Arc::new(MemoryFormStore::new());
    let form_store: Arc<dyn FormStore> = store.clone();
    let state = AppState {
        catalog: Arc::new(catalog),
        store: form_store,
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), store)
}

/// Send a GET request through the router.
pub async fn get(app: &Router, path: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request build"),
        )
        .await
        .expect("request should not fail at the transport level")
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request build"),
        )
        .await
        .expect("request should not fail at the transport level")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("body should be valid JSON")
}

/// Assert a status code, with the body in the failure message.
pub async fn assert_status(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let body = body_json(response).await;
    assert_eq!(status, expected, "unexpected status, body: {body}");
    body
}
