//! Helpers shared by router and client tests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::Path,
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::client::MatcherClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecruitStore;

pub fn test_app(store: Arc<dyn RecruitStore>) -> Router {
    test_app_with_config(store, Config::for_tests())
}

pub fn test_app_with_config(store: Arc<dyn RecruitStore>, config: Config) -> Router {
    build_router(AppState {
        store,
        matcher: MatcherClient::from_config(&config),
        config,
    })
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends one request through the router and returns status plus raw body.
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

/// Sends one request and parses the body as JSON (`Null` for an empty body).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, request).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stand-in for the external matcher. `UNKNOWN` is reported as a missing job.
pub fn stub_matcher() -> Router {
    Router::new()
        .route(
            "/match/:code",
            post(|Path(code): Path<String>| async move {
                if code == "UNKNOWN" {
                    return Json(json!({ "error": "Job not found" }));
                }
                Json(json!({
                    "results": [{
                        "_id": "665f1c2e9b1e8a0012345678",
                        "candidateName": "Jane Doe",
                        "jobCode": code,
                        "score": 82,
                        "matchedSkills": ["Go", "SQL"],
                        "missingSkills": ["Kubernetes"],
                        "summary": "Strong backend fit",
                        "shortlist": true,
                        "dateShortlisted": "2025-06-04T10:15:00.123456"
                    }]
                }))
            }),
        )
        .route(
            "/shortlist/:code",
            get(|Path(code): Path<String>| async move {
                Json(json!([{
                    "_id": "665f1c2e9b1e8a0012345678",
                    "candidateName": "Jane Doe",
                    "jobCode": code,
                    "score": 82,
                    "matchedSkills": ["Go", "SQL"],
                    "missingSkills": ["Kubernetes"],
                    "summary": "Strong backend fit",
                    "shortlist": true
                }]))
            }),
        )
}
